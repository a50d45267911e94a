//! HTTP request handlers for the tracker service.

pub mod applications;

pub use applications::{
    create_application, delete_application, get_application, list_applications,
    update_application, AppState,
};
