pub mod footer;
pub mod icons;
pub mod navbar;
pub mod project_card;
pub mod section_heading;
pub mod social_links;
pub mod tag_list;
