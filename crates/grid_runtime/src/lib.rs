//! Leptos runtime for the icon-grid widget: provider/context, effect execution, browser host
//! effects, shell components, and the build-time widget configuration.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod components;
pub mod config;
mod effect_executor;
pub mod host;
mod runtime_context;

pub use components::{use_grid_runtime, GridProvider, GridRuntimeContext, GridShell};
pub use config::{load_widget_config, GridDefaults, WidgetConfig, WidgetConfigError};
pub use host::{DomCellLocator, GridHostContext};
