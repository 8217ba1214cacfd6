//! Horizon SwitchPanel Overflow Demo
//!
//! Console walkthrough of the responsive selector strip:
//! - Mounting before the host can answer measurement queries
//! - Measured overflow partitioning as the container narrows and widens
//! - Host-driven item replacement and activation dispatch
//!
//! Run with: cargo run -p horizon-switchpanel --example overflow_demo

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_switchpanel::prelude::*;
use horizon_switchpanel_core::PerfSpan;
use tracing_subscriber::EnvFilter;

/// Shared record of the most recent activation request.
type ActivationLog = Arc<AtomicUsize>;

/// Sentinel for "no activation requested yet".
const NO_ACTIVATION: usize = usize::MAX;

/// Build the demo item collection with `active` marking the current pane.
fn build_items(
    labels: &[&str],
    active: usize,
    log: &ActivationLog,
) -> Vec<SwitchItem<String, String>> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let log = log.clone();
            SwitchItem::new(format!("{label} metrics pane"))
                .with_header(label.to_string())
                .with_active(index == active)
                .with_select_handler(move || {
                    log.store(index, Ordering::SeqCst);
                    println!("  -> select requested for item {index}");
                })
        })
        .collect()
}

/// Print the strip, the overflow group, and the raw index partition.
fn print_state(panel: &SwitchPanel<String, String>) {
    print!("  strip:");
    for selector in panel.visible_selectors() {
        let marker = if selector.active { "*" } else { "" };
        print!(" [{}{marker}]", selector.label);
    }
    if let Some(group) = panel.overflow_group() {
        print!("  overflow:");
        for entry in &group.entries {
            match entry.label {
                Some(label) => print!(" {label}"),
                None => print!(" (unlabeled)"),
            }
        }
    }
    println!();
    println!(
        "  visible {:?}, overflow {:?}",
        panel.visible_indices(),
        panel.overflow_indices()
    );
}

fn main() {
    // Partition decisions log under horizon_switchpanel at trace level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("horizon_switchpanel=info,horizon_switchpanel_core=info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║          Horizon SwitchPanel Overflow Demo               ║");
    println!("╠══════════════════════════════════════════════════════════╣");
    println!("║ Walkthrough:                                             ║");
    println!("║   • Mount before measurements are available              ║");
    println!("║   • Measured partition with an 80-point trigger reserve  ║");
    println!("║   • Host-driven replacement and activation               ║");
    println!("║   • Container resizes and orientation changes            ║");
    println!("╠══════════════════════════════════════════════════════════╣");
    println!("║ Logging:                                                 ║");
    println!("║   RUST_LOG=horizon_switchpanel=trace for partition trace ║");
    println!("╚══════════════════════════════════════════════════════════╝");

    let labels = ["Overview", "Traffic", "Conversions", "Audience", "Settings"];
    let activations: ActivationLog = Arc::new(AtomicUsize::new(NO_ACTIVATION));
    let measurements = Arc::new(StaticMeasurements::new());

    let mut panel = SwitchPanel::new(build_items(&labels, 0, &activations), measurements.clone());

    let transitions = Arc::new(AtomicUsize::new(0));
    let transitions_clone = transitions.clone();
    panel.partition_changed.connect(move |_| {
        transitions_clone.fetch_add(1, Ordering::SeqCst);
    });

    println!("\n=== Mount before measurement ===");
    panel.on_attached_to_layout();
    print_state(&panel); // Host cannot answer yet: everything stays visible

    println!("\n=== Host publishes measurements (container 420) ===");
    measurements.set_container_width(Some(420.0));
    measurements.set_header_widths(Some(vec![96.0, 88.0, 132.0, 104.0, 96.0]));
    {
        let _span = PerfSpan::new("initial_partition");
        panel.refresh();
    }
    // 80+96 = 176, 264, 396 fit below 420; 500 and 596 do not
    print_state(&panel);

    println!("\n=== Activate an overflowed entry ===");
    assert_eq!(activations.load(Ordering::SeqCst), NO_ACTIVATION);
    panel.activate(3);
    let requested = activations.load(Ordering::SeqCst);
    println!("  host observed request for item {requested}");

    // Selection is host state: rebuild the collection with the new active
    // item. Same measurements, so the split stays put.
    panel.on_items_changed(build_items(&labels, requested, &activations), Orientation::Horizontal);
    print_state(&panel);

    println!("\n=== Container narrows to 300 ===");
    measurements.set_container_width(Some(300.0));
    panel.refresh();
    print_state(&panel);

    println!("\n=== Container widens to 700 ===");
    measurements.set_container_width(Some(700.0));
    panel.refresh();
    print_state(&panel);

    println!("\n=== Container narrows again ===");
    measurements.set_container_width(Some(300.0));
    panel.refresh();
    print_state(&panel);

    println!("\n=== Switch to vertical ===");
    panel.on_items_changed(build_items(&labels, requested, &activations), Orientation::Vertical);
    print_state(&panel); // Vertical strips never overflow

    println!("\n=== Summary ===");
    println!(
        "  partition transitions observed: {}",
        transitions.load(Ordering::SeqCst)
    );
}
