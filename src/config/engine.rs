use crate::generic::luby::LubyRepresentation;

use super::ConfigOption;

/// Configuration of the [built-in engine](crate::engine::cdcl).
///
/// Other engines are free to ignore the configuration.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// The multiplicative decay applied to atom activity after each conflict.
    pub activity_decay: ConfigOption<f64>,

    /// The `u` value to multiply the luby sequence by when determining whether to perform a restart.
    pub luby_u: ConfigOption<LubyRepresentation>,

    /// Default to the last set value of an atom when choosing a value for the atom, otherwise decide with [polarity_lean](EngineConfig::polarity_lean).
    pub phase_saving: ConfigOption<bool>,

    /// The probability of assigning positive polarity to an atom when freely choosing an atom.
    pub polarity_lean: ConfigOption<f64>,

    /// The probability of choosing an atom at random, rather than by activity, when making a decision.
    pub random_decision_bias: ConfigOption<f64>,

    /// Permit (scheduled) restarts.
    pub restart: ConfigOption<bool>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            activity_decay: ConfigOption {
                name: "activity_decay",
                min: 0.5,
                max: 1.0,
                value: 0.95,
            },

            luby_u: ConfigOption {
                name: "luby",
                min: 1,
                max: LubyRepresentation::MAX,
                value: 128,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: true,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
