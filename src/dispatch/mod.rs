pub mod selector;

pub use selector::select_elevator;
