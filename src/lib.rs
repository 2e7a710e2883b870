//! QuickGen: a password generator that regenerates whenever its options change.
//!
//! The core lives in [`charset`], [`password`] and [`controller`]; [`app`]
//! is the egui front end that feeds UI events into the controller.

pub mod app;
pub mod charset;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod password;
pub mod paths;
pub mod settings;

pub use charset::{CharacterClass, ClassSet, resolve};
pub use config::GenerationConfig;
pub use controller::{Advisory, Controller, Event, GeneratorState, Transition, reduce};
pub use error::{Error, Result};
pub use form::GeneratorForm;
pub use password::{RandomSource, generate_password};
