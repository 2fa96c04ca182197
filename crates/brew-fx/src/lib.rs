//! Bottle-to-cauldron flight, cauldron geometry and arrival effects for the
//! potion game, running on a `brew_engine` host.

pub mod config;
pub mod flight;
pub mod motion;
pub mod splash;
pub mod system;
pub mod zone;

pub use config::{BubbleConfig, FlightConfig, FxConfig, GravityConfig, ShakeConfig, SplashConfig};
pub use flight::{FlightHandle, FlightPlan};
pub use motion::{apply_gravity, shake, shake_repeats};
pub use splash::{droplet_target, spawn_bubble, spawn_splash, SplashIds};
pub use system::{CauldronFx, Ingredient};
pub use zone::{distance, CauldronZone};
