// shared portfolio logic
//
// everything here is independent of the browser: the view state and its actions, the
// theme tables, the preference store, and the static content.  the environment is only
// reached through the traits in host and prefs, which the webapp implements with
// web-sys and gloo adapters
pub mod colors;
pub mod content;
pub mod host;
pub mod page;
pub mod prefs;
pub mod state;
pub mod theme;
