//! Reusable rendering pieces shared across screens.

pub mod bottom_nav;
pub mod nav_list;
pub mod num_fmt;
pub mod stat_card;
