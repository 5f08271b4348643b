mod header;
mod input;
mod map;
mod offers_list;
mod rating;
mod review_form;
mod review_item;
mod sort_options;
mod status_bar;
mod tabs;

pub use header::Header;
pub use input::TextInput;
pub use map::Map;
pub use offers_list::{OffersList, bookmark, offer_card};
pub use rating::rating_stars;
pub use review_form::{ReviewFormAction, ReviewFormState, render_review_form};
pub use review_item::review_lines;
pub use sort_options::SortOptions;
pub use status_bar::{StatusBar, StatusLevel};
pub use tabs::Tabs;
