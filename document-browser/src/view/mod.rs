pub mod controller;
pub mod state;

pub use controller::DocumentsView;
pub use state::{DocumentsViewModel, FetchState, ModalState, ViewState};
