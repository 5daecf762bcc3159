//! Screen registry, one entry per navigable route.

use color_eyre::eyre::Result;
use soshell_core::feed::FeedSource;

use crate::component::Component;
use crate::route::Route;

pub mod feed;
pub mod friends;
pub mod menu;
pub mod not_found;
pub mod placeholder;

use feed::FeedScreen;
use friends::FriendsScreen;
use menu::MenuScreen;
use placeholder::PlaceholderScreen;

/// Build every routed screen against the given feed source.
pub fn create_screens(feed: &dyn FeedSource) -> Result<Vec<(Route, Box<dyn Component>)>> {
    Ok(vec![
        (Route::Feed, Box::new(FeedScreen::new(feed)?) as Box<dyn Component>),
        (Route::Friends, Box::new(FriendsScreen::new(feed)?)),
        (Route::Watch, Box::new(PlaceholderScreen::new(Route::Watch))),
        (
            Route::Notifications,
            Box::new(PlaceholderScreen::new(Route::Notifications)),
        ),
        (Route::Menu, Box::new(MenuScreen::new(feed)?)),
    ])
}
