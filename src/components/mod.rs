//! UI Components
//!
//! One page per screen plus the widgets they share.

mod quantity_stepper;
mod food_card;
mod line_row;
mod notice;
mod confirm_dialog;
mod menu_page;
mod cart_page;
mod summary_page;

pub use quantity_stepper::QuantityStepper;
pub use food_card::FoodCard;
pub use line_row::LineRow;
pub use notice::{Notice, NoticeHandle};
pub use confirm_dialog::ConfirmDialog;
pub use menu_page::MenuPage;
pub use cart_page::CartPage;
pub use summary_page::SummaryPage;
