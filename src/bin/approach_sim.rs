use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use clap::Parser;
use std::{path::PathBuf, time::Duration};

use approach::{
    components::{LightingLayoutCatalog, LightingSystemType},
    plugins::{ApproachCommand, ApproachPlugin, BreakoutEvent, LandedEvent, LightingPlugin},
    resources::{AnimationState, ApproachConfiguration, ApproachSimConfig, DiagnosticFlags},
};

const FRAME_RATE_HZ: f64 = 60.0;

#[derive(Parser, Debug)]
#[command(name = "approach_sim")]
#[command(about = "Fly a final approach and report breakout and touchdown", long_about = None)]
struct Args {
    /// YAML simulation config; defaults are used when omitted
    config: Option<PathBuf>,

    /// Run the clock at the accelerated test rate
    #[arg(long)]
    test: bool,

    /// Diagnostic query string, e.g. "?test=true"
    #[arg(long, value_name = "QUERY")]
    flags: Option<String>,

    /// Print the light layout for a lighting system tag as JSON and exit
    #[arg(long, value_name = "TAG")]
    dump_layout: Option<LightingSystemType>,
}

impl Args {
    fn diagnostics(&self) -> DiagnosticFlags {
        let from_query = self
            .flags
            .as_deref()
            .map(DiagnosticFlags::from_query)
            .unwrap_or_default();
        DiagnosticFlags {
            test_mode: self.test || from_query.test_mode,
        }
    }
}

fn start_approach(mut commands: EventWriter<ApproachCommand>) {
    commands.send(ApproachCommand::Play);
}

fn report_breakout(mut breakouts: EventReader<BreakoutEvent>) {
    for event in breakouts.read() {
        info!(
            "Runway environment in sight at {:.0} ft, {:.2} NM",
            event.altitude_ft, event.distance_nm
        );
    }
}

fn exit_on_landing(
    mut landings: EventReader<LandedEvent>,
    state: Res<AnimationState>,
    config: Res<ApproachConfiguration>,
    mut exit: EventWriter<AppExit>,
) {
    if let Some(event) = landings.read().last() {
        info!(
            "Landed {:.3} NM from the TDZ at {:.0} ft",
            event.distance_nm,
            state.altitude_ft(&config)
        );
        exit.send(AppExit::Success);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ApproachSimConfig::load(path)?,
        None => ApproachSimConfig::default(),
    };
    config.diagnostics.test_mode |= args.diagnostics().test_mode;
    config.validate()?;

    if let Some(system) = args.dump_layout {
        let layout = LightingLayoutCatalog::create(system, &config.toggles);
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / FRAME_RATE_HZ,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins((ApproachPlugin::new(config), LightingPlugin))
        .add_systems(Startup, start_approach)
        .add_systems(Update, (report_breakout, exit_on_landing))
        .run();

    Ok(())
}
