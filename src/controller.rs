//! Recompute controller: keeps length, class selection and the displayed
//! password consistent, one event at a time

use std::fmt;

use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::charset::{CharacterClass, ClassSet, resolve};
use crate::config::{GenerationConfig, MAX_LENGTH, MIN_LENGTH, length_in_bounds};
use crate::error::{Error, Result};
use crate::form::GeneratorForm;
use crate::password::{RandomSource, generate_password};

/// Non-fatal message for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    SelectCharacterSet,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::SelectCharacterSet => f.write_str("Please select at least one character set"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// First render; the starting length is clamped into range
    Init(GenerationConfig),
    SetLength(usize),
    Increment,
    Decrement,
    ToggleClass(CharacterClass, bool),
    /// Whole config submitted at once
    Apply(GenerationConfig),
    /// Manual refresh with the unchanged config
    Refresh,
}

/// Outcome of a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A fresh password was published
    Regenerated,
    /// Length outside the bounds, state untouched
    LengthRejected { requested: usize },
    /// Config accepted but the pool is empty, prior password kept
    PoolEmpty,
}

impl Transition {
    /// Map the soft failures onto Error for callers that propagate
    pub fn into_result(self) -> Result<()> {
        match self {
            Transition::Regenerated => Ok(()),
            Transition::LengthRejected { requested } => Err(Error::InvalidLength {
                length: i64::try_from(requested).unwrap_or(i64::MAX),
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            }),
            Transition::PoolEmpty => Err(Error::EmptyCharacterPool),
        }
    }
}

/// The state triple the UI renders from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratorState {
    config: GenerationConfig,
    password: String,
    advisory: Option<Advisory>,
}

impl GeneratorState {
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn length(&self) -> usize {
        self.config.length
    }

    pub fn classes(&self) -> &ClassSet {
        &self.config.classes
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn advisory(&self) -> Option<Advisory> {
        self.advisory
    }
}

impl Drop for GeneratorState {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Apply one event to `state`, resolving and regenerating before returning
pub fn reduce<R: RandomSource + ?Sized>(
    state: &mut GeneratorState,
    event: Event,
    rng: &mut R,
) -> Transition {
    debug!(?event, "applying event");
    match event {
        Event::Init(mut config) => {
            config.length = config.length.clamp(MIN_LENGTH, MAX_LENGTH);
            state.config = config;
            regenerate(state, rng)
        }
        Event::Apply(config) => {
            if !length_in_bounds(config.length) {
                return reject(config.length);
            }
            state.config = config;
            regenerate(state, rng)
        }
        Event::SetLength(length) => set_length(state, length, rng),
        Event::Increment => {
            let length = state.config.length.saturating_add(1);
            set_length(state, length, rng)
        }
        Event::Decrement => {
            let length = state.config.length.saturating_sub(1);
            set_length(state, length, rng)
        }
        Event::ToggleClass(class, included) => {
            if included {
                state.config.classes.insert(class);
            } else {
                state.config.classes.remove(&class);
            }
            regenerate(state, rng)
        }
        Event::Refresh => regenerate(state, rng),
    }
}

fn set_length<R: RandomSource + ?Sized>(
    state: &mut GeneratorState,
    length: usize,
    rng: &mut R,
) -> Transition {
    if !length_in_bounds(length) {
        return reject(length);
    }
    state.config.length = length;
    regenerate(state, rng)
}

fn reject(requested: usize) -> Transition {
    debug!(requested, "length out of bounds, ignoring");
    Transition::LengthRejected { requested }
}

fn regenerate<R: RandomSource + ?Sized>(state: &mut GeneratorState, rng: &mut R) -> Transition {
    let pool = resolve(&state.config.classes);
    if pool.is_empty() {
        debug!("empty character pool, keeping previous password");
        state.advisory = Some(Advisory::SelectCharacterSet);
        return Transition::PoolEmpty;
    }

    match generate_password(state.config.length, &pool, rng) {
        Ok(password) => {
            state.password.zeroize();
            state.password = password;
            state.advisory = None;
            debug!(
                length = state.config.length,
                pool = pool.chars().count(),
                "password regenerated"
            );
            Transition::Regenerated
        }
        Err(err) => {
            warn!(%err, "generation failed, keeping previous password");
            state.advisory = Some(Advisory::SelectCharacterSet);
            Transition::PoolEmpty
        }
    }
}

/// Owns the state and the random source
pub struct Controller<R> {
    state: GeneratorState,
    rng: R,
}

impl<R: RandomSource> Controller<R> {
    /// Build the controller and run the initial generation
    pub fn new(initial: GenerationConfig, rng: R) -> Self {
        let mut controller = Self {
            state: GeneratorState::default(),
            rng,
        };
        controller.dispatch(Event::Init(initial));
        controller
    }

    pub fn dispatch(&mut self, event: Event) -> Transition {
        reduce(&mut self.state, event, &mut self.rng)
    }

    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    pub fn set_length(&mut self, length: usize) -> Transition {
        self.dispatch(Event::SetLength(length))
    }

    pub fn increment(&mut self) -> Transition {
        self.dispatch(Event::Increment)
    }

    pub fn decrement(&mut self) -> Transition {
        self.dispatch(Event::Decrement)
    }

    pub fn toggle_class(&mut self, class: CharacterClass, included: bool) -> Transition {
        self.dispatch(Event::ToggleClass(class, included))
    }

    pub fn refresh(&mut self) -> Transition {
        self.dispatch(Event::Refresh)
    }

    /// Validate a submitted form and apply it as one transition
    pub fn apply_form(&mut self, form: GeneratorForm) -> Result<Transition> {
        form.validate()?;
        let config = form.into_config()?;
        Ok(self.dispatch(Event::Apply(config)))
    }

    /// Whether the "+" button should be enabled
    pub fn can_increment(&self) -> bool {
        self.state.length() < MAX_LENGTH
    }

    /// Whether the "-" button should be enabled
    pub fn can_decrement(&self) -> bool {
        self.state.length() > MIN_LENGTH
    }
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{NUMBERS, all_classes};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn controller() -> Controller<StdRng> {
        Controller::new(GenerationConfig::default(), StdRng::seed_from_u64(7))
    }

    fn only(class: CharacterClass) -> ClassSet {
        [class].into_iter().collect()
    }

    #[test]
    fn test_init_generates_with_defaults() {
        let c = controller();
        assert_eq!(c.state().length(), 8);
        assert_eq!(c.state().classes(), &all_classes());
        assert_eq!(c.state().password().chars().count(), 8);
        assert!(c.state().advisory().is_none());
    }

    #[test]
    fn test_init_clamps_out_of_range_length() {
        let low = Controller::new(
            GenerationConfig::new(0, all_classes()),
            StdRng::seed_from_u64(1),
        );
        assert_eq!(low.state().length(), 1);
        assert_eq!(low.state().password().chars().count(), 1);
        assert!(low.state().advisory().is_none());

        let high = Controller::new(
            GenerationConfig::new(75, only(CharacterClass::Numbers)),
            StdRng::seed_from_u64(1),
        );
        assert_eq!(high.state().length(), 50);
        assert_eq!(high.state().password().chars().count(), 50);
        assert_eq!(high.state().classes(), &only(CharacterClass::Numbers));
    }

    #[test]
    fn test_set_length_regenerates() {
        let mut c = controller();
        assert_eq!(c.set_length(20), Transition::Regenerated);
        assert_eq!(c.state().length(), 20);
        assert_eq!(c.state().password().chars().count(), 20);
    }

    #[test]
    fn test_set_length_zero_rejected_at_min() {
        let mut c = controller();
        c.set_length(1);
        let before = c.state().password().to_string();

        assert_eq!(c.set_length(0), Transition::LengthRejected { requested: 0 });
        assert_eq!(c.state().length(), 1);
        assert_eq!(c.state().password(), before);
    }

    #[test]
    fn test_set_length_51_rejected_at_max() {
        let mut c = controller();
        c.set_length(50);
        assert_eq!(c.set_length(51), Transition::LengthRejected { requested: 51 });
        assert_eq!(c.state().length(), 50);
    }

    #[test]
    fn test_increment_and_decrement_stop_at_bounds() {
        let mut c = controller();
        c.set_length(1);
        assert!(!c.can_decrement());
        assert!(matches!(c.decrement(), Transition::LengthRejected { .. }));
        assert_eq!(c.state().length(), 1);

        c.set_length(50);
        assert!(!c.can_increment());
        assert!(matches!(c.increment(), Transition::LengthRejected { .. }));
        assert_eq!(c.state().length(), 50);

        assert_eq!(c.decrement(), Transition::Regenerated);
        assert_eq!(c.state().length(), 49);
        assert_eq!(c.state().password().chars().count(), 49);
    }

    #[test]
    fn test_toggle_regenerates_from_new_pool() {
        let mut c = controller();
        for class in [
            CharacterClass::Uppercase,
            CharacterClass::Lowercase,
            CharacterClass::Symbols,
        ] {
            c.toggle_class(class, false);
        }
        assert_eq!(c.state().classes(), &only(CharacterClass::Numbers));
        assert!(c.state().password().chars().all(|ch| NUMBERS.contains(ch)));
    }

    #[test]
    fn test_deselecting_last_class_keeps_password() {
        let mut c = Controller::new(
            GenerationConfig::new(12, only(CharacterClass::Lowercase)),
            StdRng::seed_from_u64(9),
        );
        let before = c.state().password().to_string();
        assert_eq!(before.chars().count(), 12);

        assert_eq!(
            c.toggle_class(CharacterClass::Lowercase, false),
            Transition::PoolEmpty
        );
        assert!(c.state().classes().is_empty());
        assert_eq!(c.state().password(), before);
        assert_eq!(c.state().advisory(), Some(Advisory::SelectCharacterSet));
        assert_eq!(resolve(c.state().classes()), "");

        // Length changes while empty are accepted but still skip generation
        assert_eq!(c.set_length(30), Transition::PoolEmpty);
        assert_eq!(c.state().length(), 30);
        assert_eq!(c.state().password(), before);

        // Re-selecting clears the advisory
        assert_eq!(
            c.toggle_class(CharacterClass::Numbers, true),
            Transition::Regenerated
        );
        assert!(c.state().advisory().is_none());
        assert_eq!(c.state().password().chars().count(), 30);
    }

    #[test]
    fn test_refresh_keeps_config() {
        let mut c = controller();
        let config = c.state().config().clone();
        assert_eq!(c.refresh(), Transition::Regenerated);
        assert_eq!(c.state().config(), &config);
        assert_eq!(c.state().password().chars().count(), 8);
    }

    #[test]
    fn test_apply_form_with_unknown_ids_only() {
        let mut c = controller();
        let before = c.state().password().to_string();
        let form = GeneratorForm {
            length: 10,
            character_sets: vec!["hieroglyphs".into()],
        };
        assert_eq!(c.apply_form(form).unwrap(), Transition::PoolEmpty);
        assert_eq!(c.state().password(), before);
        assert_eq!(c.state().advisory(), Some(Advisory::SelectCharacterSet));
    }

    #[test]
    fn test_apply_form_rejects_empty_sets() {
        let mut c = controller();
        let form = GeneratorForm {
            length: 10,
            character_sets: vec![],
        };
        assert!(matches!(c.apply_form(form), Err(Error::EmptyCharacterPool)));
        assert_eq!(c.state().length(), 8);
    }

    #[test]
    fn test_apply_out_of_range_leaves_state() {
        let mut state = GeneratorState::default();
        let mut rng = StdRng::seed_from_u64(11);
        let t = reduce(
            &mut state,
            Event::Apply(GenerationConfig::new(99, all_classes())),
            &mut rng,
        );
        assert_eq!(t, Transition::LengthRejected { requested: 99 });
        assert_eq!(state.length(), 8);
        assert!(state.password().is_empty());
    }

    #[test]
    fn test_transition_into_result() {
        assert!(Transition::Regenerated.into_result().is_ok());
        assert!(matches!(
            Transition::PoolEmpty.into_result(),
            Err(Error::EmptyCharacterPool)
        ));
        assert!(matches!(
            Transition::LengthRejected { requested: 0 }.into_result(),
            Err(Error::InvalidLength { length: 0, .. })
        ));
    }

    #[test]
    fn test_advisory_message() {
        assert_eq!(
            Advisory::SelectCharacterSet.to_string(),
            "Please select at least one character set"
        );
    }
}
