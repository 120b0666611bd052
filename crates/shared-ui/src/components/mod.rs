// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod pagination;
pub mod search_bar;
pub mod sheet;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod dropdown_menu;
pub mod separator;
pub mod switch;
pub mod toast;

// Depends on context only
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use dropdown_menu::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use separator::*;
pub use sheet::*;
pub use sidebar::*;
pub use skeleton::*;
pub use switch::*;
pub use textarea::*;
pub use toast::*;
