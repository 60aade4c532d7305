//! Integration tests for the pendra pendulum engine.

use approx::assert_abs_diff_eq;
use pendra::{
    layout, ArmParams, Ensemble, EnsembleBuilder, PendulumState, SegmentBuffer, Simulator,
    WorldParams,
};

#[test]
fn trajectories_are_deterministic() {
    let sim = Simulator::new();
    let mut a = Ensemble::fan_out(16, 80.0, 90.0).unwrap();
    let mut b = Ensemble::fan_out(16, 80.0, 90.0).unwrap();

    let mut out_a = vec![0.0; 16 * layout::STRIDE];
    let mut out_b = vec![0.0; 16 * layout::STRIDE];
    for _ in 0..500 {
        sim.step_into(&mut a, &mut out_a);
        sim.step_into(&mut b, &mut out_b);
    }

    // Bit-identical, not merely close.
    assert_eq!(a, b);
    assert_eq!(out_a, out_b);
}

#[test]
fn pendulums_are_independent() {
    let sim = Simulator::new();

    // Instance 0 of a fan-out batch starts at the base angles regardless of
    // batch size, so its trajectory must match a batch of one.
    let mut solo = Ensemble::fan_out(1, 80.0, 90.0).unwrap();
    let mut batch = Ensemble::fan_out(3, 80.0, 90.0).unwrap();
    sim.simulate(&mut solo, 200);
    sim.simulate(&mut batch, 200);
    assert_eq!(solo.states[0], batch.states[0]);

    // Perturbing pendulum 2 leaves pendulum 0 untouched.
    let mut perturbed = Ensemble::fan_out(3, 80.0, 90.0).unwrap();
    perturbed.states[2] = PendulumState::from_degrees(-45.0, 170.0);
    sim.simulate(&mut perturbed, 200);
    assert_eq!(perturbed.states[0], batch.states[0]);
}

#[test]
fn rest_state_stays_at_rest() {
    let sim = Simulator::new();
    let mut e = Ensemble::fan_out(1, 0.0, 0.0).unwrap();
    sim.simulate(&mut e, 1000);
    assert_eq!(e.states[0], PendulumState::at_rest());
}

#[test]
fn damping_keeps_small_oscillations_bounded() {
    // Small-angle start under default friction/speed: total angular speed
    // must not grow without bound over 10k steps. Catches regressions in
    // the double damping application.
    let sim = Simulator::new();
    let mut e = Ensemble::fan_out(1, 1.0, 0.0).unwrap();

    let mut max_speed: f64 = 0.0;
    for _ in 0..10_000 {
        sim.step(&mut e);
        let s = &e.states[0];
        max_speed = max_speed.max(s.omega1.abs() + s.omega2.abs());
    }
    assert!(max_speed.is_finite());
    assert!(
        max_speed < 1.0,
        "small-angle oscillation reached angular speed {max_speed}"
    );
}

#[test]
fn step_into_honors_the_offset_contract() {
    let sim = Simulator::new();
    let mut e = Ensemble::fan_out(3, 80.0, 90.0).unwrap();

    // Sentinel prefill so untouched slots are detectable.
    let mut out = vec![-7.25; 3 * layout::STRIDE];
    sim.step_into(&mut e, &mut out);

    for i in 0..3 {
        let block = &out[i * layout::STRIDE..(i + 1) * layout::STRIDE];
        for offset in [0, 1, 2, 5, 8, 11] {
            assert_eq!(block[offset], -7.25, "block {i} slot {offset} was written");
        }
        for offset in [3, 4, 6, 7, 9, 10] {
            assert_ne!(block[offset], -7.25, "block {i} slot {offset} not written");
        }
        // The repeated elbow vertex matches the first.
        assert_eq!(block[3], block[6]);
        assert_eq!(block[4], block[7]);
    }
}

#[test]
#[should_panic(expected = "output buffer")]
fn step_into_rejects_short_buffers() {
    let sim = Simulator::new();
    let mut e = Ensemble::fan_out(2, 80.0, 90.0).unwrap();
    let mut out = vec![0.0; layout::STRIDE]; // room for one pendulum, not two
    sim.step_into(&mut e, &mut out);
}

#[test]
fn first_step_endpoints_come_from_initial_angles() {
    // createBatch(1, 80, 90, defaults) then one step: endpoints come from
    // the initial angles, one step behind the state.
    let sim = Simulator::new();
    let mut e = Ensemble::fan_out(1, 80.0, 90.0).unwrap();
    let mut out = vec![0.0; layout::STRIDE];
    sim.step_into(&mut e, &mut out);

    let theta1 = 80.0 * std::f64::consts::PI / 180.0;
    let theta2 = 90.0 * std::f64::consts::PI / 180.0;
    let x1 = 15.0 * theta1.sin();
    let y1 = -15.0 * theta1.cos();
    assert_abs_diff_eq!(out[3], x1, epsilon = 1e-9);
    assert_abs_diff_eq!(out[4], y1, epsilon = 1e-9);
    assert_abs_diff_eq!(out[9], x1 + 15.0 * theta2.sin(), epsilon = 1e-9);
    assert_abs_diff_eq!(out[10], y1 - 15.0 * theta2.cos(), epsilon = 1e-9);
}

#[test]
fn parallel_step_matches_sequential() {
    let sim = Simulator::new();
    let mut seq = Ensemble::fan_out(64, 80.0, 90.0).unwrap();
    let mut par = seq.clone();

    let mut out_seq = vec![0.0; 64 * layout::STRIDE];
    let mut out_par = vec![0.0; 64 * layout::STRIDE];
    for _ in 0..50 {
        sim.step_into(&mut seq, &mut out_seq);
        sim.step_into_par(&mut par, &mut out_par);
    }
    assert_eq!(seq, par);
    assert_eq!(out_seq, out_par);
}

#[test]
fn per_pendulum_arms_diverge_from_uniform() {
    let sim = Simulator::new();

    let mut uniform = Ensemble::fan_out(2, 80.0, 90.0).unwrap();
    let mut mixed = EnsembleBuilder::new()
        .count(2)
        .per_pendulum_arms(vec![
            ArmParams::default(),
            ArmParams::new(10.0, 10.0, 5.0, 25.0),
        ])
        .build()
        .unwrap();

    sim.simulate(&mut uniform, 100);
    sim.simulate(&mut mixed, 100);

    // Pendulum 0 shares arms with the uniform batch; pendulum 1 does not.
    assert_eq!(uniform.states[0], mixed.states[0]);
    assert_ne!(uniform.states[1], mixed.states[1]);
}

#[test]
fn seeded_buffer_survives_stepping() {
    let sim = Simulator::new();
    let mut e = Ensemble::fan_out(4, 80.0, 90.0).unwrap();
    let mut buf = SegmentBuffer::new(4);
    buf.seed();
    let seeded: Vec<f64> = buf.as_slice().to_vec();

    for _ in 0..10 {
        sim.step_into(&mut e, buf.as_mut_slice());
    }
    for i in 0..4 {
        for offset in [0, 1, 2, 5, 8, 11] {
            let idx = i * layout::STRIDE + offset;
            assert_eq!(buf.as_slice()[idx], seeded[idx]);
        }
    }
}

#[test]
fn custom_world_params_apply() {
    // Frictionless, slower integration still moves from a non-rest start.
    let sim = Simulator::new();
    let mut e = EnsembleBuilder::new()
        .count(1)
        .base_angles_deg(30.0, 0.0)
        .world(WorldParams::new(9.81, 0.01, 0.0))
        .build()
        .unwrap();
    let start = e.states[0];
    sim.step(&mut e);
    assert_ne!(e.states[0], start);
}
