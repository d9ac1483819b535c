//! Entry point for the Atelier onboarding screen.
//!
//! This Dioxus desktop application shows the designer quote carousel in a
//! phone-proportioned window.

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tokio::time::{sleep, Duration};

use atelier_onboarding::components::App;
use atelier_onboarding::motion;
use atelier_onboarding::state::{catalog, OnboardingState};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global storage for the start page argument.
static START_PAGE: OnceLock<usize> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "atelier-onboarding")]
#[command(about = "Onboarding carousel screen for the Atelier fashion app")]
struct Args {
    /// Page to open the carousel on, clamped to the catalog range
    #[arg(short, long, default_value = "0")]
    start_page: usize,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting Atelier onboarding");

    // Parse command line arguments
    let args = Args::parse();

    // Store args in global state
    START_PAGE.set(args.start_page).ok();

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Atelier")
                        .with_inner_size(LogicalSize::new(390, 844))
                        .with_resizable(false),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@400;500;600;700&family=Inter:wght@400;500;600&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Root application component that manages the motion driver.
#[component]
fn RootApp() -> Element {
    // Create state signal
    let state = use_signal(|| {
        let mut state =
            OnboardingState::new(catalog::default_model(), motion::layout::PAGE_WIDTH);
        let start_page = START_PAGE.get().copied().unwrap_or(0);
        if start_page > 0 {
            state.jump_to_page(start_page);
        }
        state
    });

    // Request shutdown on unmount
    use_drop(|| {
        tracing::info!("Shutting down onboarding screen");
        motion::request_shutdown();
    });

    // Start the snap motion driver
    let _motion_driver = use_resource(move || {
        let mut state = state;

        async move {
            loop {
                if motion::is_shutdown_requested() {
                    return;
                }

                if let Some(target) = motion::take_snap_request() {
                    run_snap(&mut state, target).await;
                }

                sleep(Duration::from_millis(motion::snap::IDLE_POLL_MS)).await;
            }
        }
    });

    rsx! {
        App { state }
    }
}

/// Animates the strip from its current offset to `target_x` with an
/// ease-out tween, then settles the discrete state.
async fn run_snap(state: &mut Signal<OnboardingState>, target_x: f64) {
    let from = state.read().offset_x;
    let distance = target_x - from;
    let steps = (motion::snap::DURATION_MS / motion::snap::TICK_MS).max(1);

    for step in 1..=steps {
        if motion::is_shutdown_requested() {
            return;
        }
        // A new drag grabbing the strip cancels the tween.
        if state.read().is_dragging() {
            return;
        }

        let progress = step as f64 / steps as f64;
        let eased = motion::ease_out_cubic(progress);
        state.write().set_offset(from + distance * eased);

        sleep(Duration::from_millis(motion::snap::TICK_MS)).await;
    }

    state.write().settle();
}
