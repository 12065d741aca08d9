pub mod terminal;
pub mod theme;
pub mod view;

pub use terminal::Tui;
pub use theme::Theme;
pub use view::draw;
