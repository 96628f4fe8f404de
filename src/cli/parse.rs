use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use clause_stage::{
    config::{Config, ConfigOption},
    generic::luby::LubyRepresentation,
    structures::atom::Atom,
};

/// Options which relate to the command line tool, rather than the session.
#[derive(Debug, Default)]
pub struct CliOptions {
    pub path: PathBuf,
    pub model: bool,
    pub core: bool,
    pub core_bound: isize,
    pub time_limit: u64,
}

pub fn cli() -> Command {
    Command::new("clause_stage_cli")
        .about("Determines whether a DIMACS formula is satisfiable or unsatisfiable, with a model or an unsatisfiable core.")

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to read."))

        .arg(Arg::new("model")
            .short('m')
            .long("model")
            .action(ArgAction::SetTrue)
            .help("Display a model on finding the formula is satisfiable."))

        .arg(Arg::new("core")
            .short('c')
            .long("core")
            .action(ArgAction::SetTrue)
            .help("Display an unsatisfiable core on finding the formula is unsatisfiable."))

        .arg(Arg::new("core_bound")
            .long("core-bound")
            .value_parser(value_parser!(isize))
            .allow_negative_numbers(true)
            .num_args(1)
            .help("The greatest clause index to consider for the core.
Default: the last clause.

Negative bounds, or bounds beyond the last clause, are read as the last clause."))

        .arg(Arg::new("time_limit")
            .short('t')
            .long("time-limit")
            .value_parser(value_parser!(u64))
            .num_args(1)
            .help("A time limit for the solve, in seconds.
Default: 0, for no limit."))

        .arg(Arg::new("no_trace")
            .long("no-trace")
            .action(ArgAction::SetTrue)
            .help("Do not record proof traces, and so do not identify a core."))

        .arg(Arg::new("atom_limit")
            .long("atom-limit")
            .value_parser(value_parser!(Atom))
            .num_args(1)
            .help("The greatest atom permitted in a clause."))

        .arg(Arg::new("activity_decay")
            .long("activity-decay")
            .value_parser(value_parser!(f64))
            .num_args(1)
            .help("The multiplicative decay applied to atom activity after each conflict, between 0.5 and 1."))

        .arg(Arg::new("luby")
            .long("luby")
            .value_parser(value_parser!(LubyRepresentation))
            .num_args(1)
            .help("The multiple of the luby sequence used to schedule restarts."))

        .arg(Arg::new("polarity_lean")
            .long("polarity-lean")
            .value_parser(value_parser!(f64))
            .num_args(1)
            .help("The probability of choosing true when freely valuing an atom."))

        .arg(Arg::new("random_decision_bias")
            .long("random-decision-bias")
            .value_parser(value_parser!(f64))
            .num_args(1)
            .help("The probability of choosing an atom at random, rather than by activity."))

        .arg(Arg::new("no_phase_saving")
            .long("no-phase-saving")
            .action(ArgAction::SetTrue)
            .help("Value atoms by polarity lean, rather than by their previous value."))

        .arg(Arg::new("no_restart")
            .long("no-restart")
            .action(ArgAction::SetTrue)
            .help("Prevent decisions from being forgotten."))
}

/// Sets an option from an argument, if given, exiting if the value is outside the bounds of the option.
fn set_from_args<T>(args: &ArgMatches, id: &str, option: &mut ConfigOption<T>)
where
    T: Clone + PartialOrd + std::fmt::Display + Send + Sync + 'static,
{
    if let Ok(Some(value)) = args.try_get_one::<T>(id) {
        if option.set(value.clone()).is_err() {
            let (min, max) = option.min_max();
            println!("c {} requires a value between {min} and {max}", option.name);
            std::process::exit(1);
        }
        println!("c {} set to: {value}", option.name);
    }
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    set_from_args(args, "atom_limit", &mut the_config.atom_limit);
    set_from_args(args, "activity_decay", &mut the_config.engine.activity_decay);
    set_from_args(args, "luby", &mut the_config.engine.luby_u);
    set_from_args(args, "polarity_lean", &mut the_config.engine.polarity_lean);
    set_from_args(args, "random_decision_bias", &mut the_config.engine.random_decision_bias);

    if args.get_flag("no_trace") {
        the_config.proof_trace.value = false;
    }

    if args.get_flag("no_phase_saving") {
        the_config.engine.phase_saving.value = false;
    }

    if args.get_flag("no_restart") {
        the_config.engine.restart.value = false;
    }

    the_config
}

pub fn options_from_args(args: &ArgMatches) -> CliOptions {
    let mut options = CliOptions {
        core_bound: -1,
        ..Default::default()
    };

    if let Ok(Some(path)) = args.try_get_one::<PathBuf>("path") {
        options.path = path.clone();
    }

    options.model = args.get_flag("model");
    options.core = args.get_flag("core");

    if let Ok(Some(bound)) = args.try_get_one::<isize>("core_bound") {
        options.core_bound = *bound;
    }

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        options.time_limit = *secs;
    }

    options
}
