use tracing::debug;

use crate::error::Result;
use crate::geometry::{CanonicalLine, FormKind, InputForm};
use crate::render::{self, EquationTexts};
use crate::tessellation::{self, GeometryArtifacts};

/// Result of one full recalculation pass.
///
/// Each pass fully supersedes the previous one; nothing is retained across
/// calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Recalculation {
    pub line: CanonicalLine,
    pub artifacts: GeometryArtifacts,
    pub texts: EquationTexts,
}

/// Explicit session state: the active input form and the validation mode.
///
/// There is no process-wide state; thread a session through calls instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    form: InputForm,
    strict: bool,
}

impl Session {
    /// Creates a session showing the first preset, `y = 2x + 1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: PRESETS[0].form,
            strict: false,
        }
    }

    /// Enables or disables strict input validation.
    ///
    /// Off by default: the baseline behavior is silent pass-through of
    /// degenerate and non-numeric input.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The currently active form.
    #[must_use]
    pub fn form(&self) -> &InputForm {
        &self.form
    }

    /// The tag of the currently active form (the selected tab).
    #[must_use]
    pub fn current_kind(&self) -> FormKind {
        self.form.kind()
    }

    /// Switches the active form, replacing all field values.
    pub fn set_form(&mut self, form: InputForm) {
        self.form = form;
    }

    /// Loads a canned example into the session.
    pub fn load_preset(&mut self, preset: &Preset) {
        debug!(label = preset.label, "loading preset");
        self.form = preset.form;
    }

    /// Runs one synchronous recalculation: resolve, then derive and render.
    ///
    /// # Errors
    ///
    /// Infallible with strict mode off. With strict mode on, degenerate or
    /// non-finite input is reported as [`LinealisError::Form`].
    ///
    /// [`LinealisError::Form`]: crate::error::LinealisError::Form
    pub fn recalculate(&self) -> Result<Recalculation> {
        if self.strict {
            self.form.validate()?;
        }
        debug!(form = self.form.kind().name(), "recalculating");
        let line = self.form.resolve();
        debug!(?line, "resolved canonical form");
        let artifacts = tessellation::derive(&line);
        let texts = render::render(&line);
        Ok(Recalculation {
            line,
            artifacts,
            texts,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// A canned example: a label plus the form values it loads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub label: &'static str,
    pub form: InputForm,
}

/// The built-in example presets, in button order.
pub const PRESETS: [Preset; 4] = [
    Preset {
        label: "y = 2x + 1",
        form: InputForm::SlopeIntercept { m: 2.0, b: 1.0 },
    },
    Preset {
        label: "y = -x + 3",
        form: InputForm::SlopeIntercept { m: -1.0, b: 3.0 },
    },
    Preset {
        label: "x = 2",
        form: InputForm::General {
            a: 1.0,
            b: 0.0,
            c: -2.0,
        },
    },
    Preset {
        label: "y = -1",
        form: InputForm::SlopeIntercept { m: 0.0, b: -1.0 },
    },
];

/// Parses a raw input field, yielding `NaN` for non-numeric text.
///
/// This is the only place malformed input enters the engine. It never errors
/// in baseline mode; the `NaN` flows through every downstream formula and
/// surfaces in the display text.
#[must_use]
pub fn parse_field(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}
