pub mod prize_list;
pub mod win_modal;

pub use prize_list::PrizeList;
pub use win_modal::WinModal;
