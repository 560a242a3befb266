//! Builds a closed curve, edits it and prints the resampled polyline.
//!
//! This example shows how to:
//! - Build a curve from anchors with different handle modes
//! - Keep curves in a `CurveSet` and react to their change events
//! - Walk the curve at evenly spaced global parameters
//!
//! Run with: cargo run -p bezel --example sample_curve
//! Set `RUST_LOG=bezel_curve=trace` to see every edit.

use bezel::prelude::*;

fn build_curve() -> Curve {
    let mut curve = Curve::with_settings(CurveSettings::default().with_sample_rate(40));
    curve.add_anchor(AnchorPoint::with_default_handles(Vec3::ZERO).with_type(AnchorPointType::Connected));
    curve.add_anchor(AnchorPoint::with_default_handles(Vec3::new(10.0, 0.0, 0.0)));
    curve.add_anchor(
        AnchorPoint::with_default_handles(Vec3::new(10.0, 8.0, 0.0)).with_type(AnchorPointType::Broken),
    );
    curve
}

fn main() {
    init(&Config::default().with_log_filter("info,bezel_curve=debug"));

    let mut curves = CurveSet::new();
    let handle = curves.insert(build_curve());

    // Split the closing segment at its middle sample, snapped to the grid.
    {
        let curve = curves.get_mut(handle).expect("curve was just inserted");
        let samples = curve.sample(8, false);
        let split = samples[samples.len() - 4];
        let position = curve.settings().snap_to_grid(split.position);
        let index = curve
            .insert_at_sample(&split, AnchorPoint::with_default_handles(position))
            .expect("sample comes from this curve");
        curve
            .set_handles_rotation(index, Quat::from_rotation_arc(Vec3::Z, Vec3::NEG_Y))
            .expect("anchor was just inserted");
        curve
            .set_point_type(index, AnchorPointType::Connected)
            .expect("anchor was just inserted");
    }

    for (handle, event) in curves.drain_events() {
        tracing::info!(?handle, ?event, topology = event.is_topology_change(), "Curve changed");
    }

    let curve = curves.get(handle).expect("curve is still registered");
    let table = curve.arc_length_table();
    println!(
        "{} anchors, {} segments, length {:.3}",
        curve.len(),
        curve.segment_count(),
        table.total_length()
    );

    for anchor in curve.anchors() {
        println!(
            "  {:<8} {:?} at {:?}",
            anchor.name,
            anchor.point_type(),
            anchor.position(curve)
        );
    }

    println!("Evenly spaced points:");
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        println!("  t = {:.1}: {:?}", t, curve.point_at_with(&table, t));
    }

    let samples = curve.sample_oriented(curve.sample_rate(), true, Vec3::Z);
    println!("{} samples", samples.len());
    for sample in samples.iter().step_by(20) {
        println!(
            "  {:?} tangent {:?} normal {:?} (segment ending at {})",
            sample.position, sample.tangent, sample.normal, sample.segment_end_index
        );
    }
}
