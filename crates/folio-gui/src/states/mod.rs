mod page;
mod ui;

pub use page::PageState;
pub use ui::UIState;
