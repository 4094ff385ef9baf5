use prism_core::consts::N_MAX;
use prism_core::error::PrismError;
use prism_core::fft::{Resolution, StagePlan};
use prism_core::pipeline::SpectralPipeline;

// ---------------------------------------------------------------------------
// Resolution::new
// ---------------------------------------------------------------------------

#[test]
fn test_resolution_accepts_every_power_of_two() {
    for log2 in 0..=11 {
        let n = 1u32 << log2;
        let r = Resolution::new(n).expect("power of two within range");
        assert_eq!(r.get(), n as usize);
        assert_eq!(r.log2(), log2);
        assert_eq!(r.half(), (n / 2) as usize);
    }
}

#[test]
fn test_resolution_rejects_zero() {
    assert!(matches!(
        Resolution::new(0),
        Err(PrismError::InvalidResolution { n: 0, .. })
    ));
}

#[test]
fn test_resolution_rejects_non_power_of_two() {
    for n in [3, 6, 100, 1000, 2047] {
        assert!(
            matches!(Resolution::new(n), Err(PrismError::InvalidResolution { .. })),
            "{n} should be rejected"
        );
    }
}

#[test]
fn test_resolution_rejects_above_maximum() {
    assert!(matches!(
        Resolution::new(N_MAX * 2),
        Err(PrismError::ResolutionTooLarge { n: 4096, max: 2048 })
    ));
    assert!(matches!(
        Resolution::new(3000),
        Err(PrismError::ResolutionTooLarge { .. })
    ));
}

#[test]
fn test_resolution_error_message_is_descriptive() {
    let err = Resolution::new(100).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("100"), "got: {msg}");
    assert!(msg.contains("power of two"), "got: {msg}");
}

#[test]
fn test_resolution_display() {
    let r = Resolution::new(256).unwrap();
    assert_eq!(r.to_string(), "256x256");
}

#[test]
fn test_pipeline_construction_fails_fast() {
    assert!(SpectralPipeline::new(0).is_err());
    assert!(SpectralPipeline::new(48).is_err());
    assert!(SpectralPipeline::new(4096).is_err());
    assert!(SpectralPipeline::new(2048).is_ok());
}

// ---------------------------------------------------------------------------
// StagePlan
// ---------------------------------------------------------------------------

#[test]
fn test_stage_plan_radix4_even_log2() {
    let plan = StagePlan::for_radix(Resolution::new(256).unwrap(), 4);
    assert_eq!(plan.radix4_stages, 4);
    assert_eq!(plan.radix2_stages, 0);
}

#[test]
fn test_stage_plan_radix4_odd_log2_has_one_radix2_tail() {
    let plan = StagePlan::for_radix(Resolution::new(2048).unwrap(), 4);
    assert_eq!(plan.radix4_stages, 5);
    assert_eq!(plan.radix2_stages, 1);

    let plan = StagePlan::for_radix(Resolution::new(2).unwrap(), 4);
    assert_eq!(plan.radix4_stages, 0);
    assert_eq!(plan.radix2_stages, 1);
}

#[test]
fn test_stage_plan_radix2_only() {
    let plan = StagePlan::for_radix(Resolution::new(1024).unwrap(), 2);
    assert_eq!(plan.radix4_stages, 0);
    assert_eq!(plan.radix2_stages, 10);
    assert_eq!(plan.total_stages(), 10);
}

#[test]
fn test_stage_plan_size_one_has_no_stages() {
    let plan = Resolution::new(1).unwrap().stage_plan();
    assert_eq!(plan.total_stages(), 0);
}
