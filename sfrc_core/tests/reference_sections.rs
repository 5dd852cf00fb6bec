//! End-to-end checks of the section engine against the published reference
//! section and its documented boundary behavior.

use approx::assert_relative_eq;

use sfrc_core::calculations::moment_curvature::LimitStateCandidate;
use sfrc_core::calculations::shear::{Reinforcement, ShearDemand};
use sfrc_core::calculations::CalculationOutput;
use sfrc_core::materials::{flexural_tensile_strength, size_effect_factor};
use sfrc_core::section::{DerivedProperties, SectionInputs};
use sfrc_core::{compute_moment_curvature, compute_shear_capacity, Project};

fn reference_section() -> SectionInputs {
    SectionInputs {
        fc_mpa: 28.0,
        daggmax_mm: 16.0,
        fy_mpa: 400.0,
        as_mm2: 226.0,
        rhof: 1.0,
        vf: 0.005,
        df_mm: 0.55,
        lf_mm: 35.0,
        b_mm: 120.0,
        d_mm: 435.0,
        h_mm: 500.0,
    }
}

fn reference_bars() -> Reinforcement {
    Reinforcement { phibar_mm: 12.0, ns: 2 }
}

fn reference_demand() -> ShearDemand {
    ShearDemand { m_knm: 48.16, v_kn: 81.08 }
}

#[test]
fn reference_yield_moment() {
    let mc = compute_moment_curvature(&reference_section()).unwrap();
    assert_relative_eq!(mc.yielding.moment_knm, 45.867_429_477_333_56, max_relative = 1e-6);
    assert_relative_eq!(mc.cracking.moment_knm, 14.814_046_8, max_relative = 1e-6);
    assert_relative_eq!(mc.ultimate.moment_knm, 47.284_680_767_146_064, max_relative = 1e-6);
    assert_relative_eq!(mc.om, 8.209_747_857_658_195, max_relative = 1e-9);
}

#[test]
fn reference_limit_states_are_monotonic() {
    let mc = compute_moment_curvature(&reference_section()).unwrap();
    assert!(mc.cracking.moment_knm <= mc.yielding.moment_knm);
    assert!(mc.yielding.moment_knm <= mc.ultimate.moment_knm);
    assert!(mc.cracking.curvature_per_mm <= mc.yielding.curvature_per_mm);
    assert!(mc.yielding.curvature_per_mm <= mc.ultimate.curvature_per_mm);
    assert!(mc.is_monotonic());
}

#[test]
fn reference_shear_capacity() {
    let shear =
        compute_shear_capacity(&reference_section(), &reference_bars(), &reference_demand())
            .unwrap();
    assert_relative_eq!(shear.vcsdt_kn, 32.085_406_592_270_59, max_relative = 1e-6);
    assert_relative_eq!(shear.vf_kn, 23.403_482_080_275_513, max_relative = 1e-6);
    assert_relative_eq!(shear.vd_kn, 5.736_966_812_785_251, max_relative = 1e-6);
}

#[test]
fn total_shear_is_exact_sum_of_mechanisms() {
    for as_mm2 in [150.0, 226.0, 400.0, 600.0] {
        for fc_mpa in [25.0, 28.0, 40.0] {
            for vf in [0.0, 0.005, 0.01] {
                let section = SectionInputs {
                    as_mm2,
                    fc_mpa,
                    vf,
                    ..reference_section()
                };
                let s = compute_shear_capacity(&section, &reference_bars(), &reference_demand())
                    .unwrap();
                assert_eq!(
                    s.vcsdt_kn,
                    s.vd_kn + s.vc_kn + s.vai_kn + s.vf_kn,
                    "As={as_mm2} fc={fc_mpa} Vf={vf}"
                );
            }
        }
    }
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let section = reference_section();
    let first = compute_moment_curvature(&section).unwrap();
    let second = compute_moment_curvature(&section).unwrap();
    assert_eq!(first, second);

    let a = compute_shear_capacity(&section, &reference_bars(), &reference_demand()).unwrap();
    let b = compute_shear_capacity(&section, &reference_bars(), &reference_demand()).unwrap();
    assert_eq!(a.vcsdt_kn.to_bits(), b.vcsdt_kn.to_bits());
    assert_eq!(a, b);
}

#[test]
fn size_effect_boundary_at_600_mm() {
    assert_eq!(size_effect_factor(600.0), 0.4);
    assert_eq!(size_effect_factor(125.0), 1.0);
    assert_relative_eq!(
        size_effect_factor(599.0),
        1.0 - 0.6 * (59.9 - 12.5) / 47.5,
        max_relative = 1e-12
    );
    assert!(size_effect_factor(599.0) > 0.4);
}

#[test]
fn tensile_band_boundary_at_20_5_mpa() {
    assert_eq!(flexural_tensile_strength(20.5), 4.3);
    assert_eq!(flexural_tensile_strength(20.49), 3.7);
    assert_eq!(flexural_tensile_strength(45.5), 6.8);
    assert_eq!(flexural_tensile_strength(80.0), 6.8);
}

#[test]
fn heavier_reinforcement_switches_yielding_to_equilibrium_root() {
    let section = SectionInputs {
        as_mm2: 600.0,
        ..reference_section()
    };
    let props = DerivedProperties::resolve(&section).unwrap();
    let mc = compute_moment_curvature(&section).unwrap();
    let pair = mc.yielding_candidates;

    assert!(pair.steel_strain <= props.esy);
    assert_eq!(pair.governing, LimitStateCandidate::Equilibrium);
    assert_eq!(mc.yielding.moment_knm, pair.equilibrium.moment_knm);
    assert_eq!(mc.yielding.k, pair.equilibrium.k);
    assert_relative_eq!(mc.yielding.moment_knm, 103.665_372_773_346_7, max_relative = 1e-6);
    assert_relative_eq!(pair.yielded.moment_knm, 96.458_086_650_223_22, max_relative = 1e-6);

    let reference = compute_moment_curvature(&reference_section()).unwrap();
    assert_eq!(reference.yielding_candidates.governing, LimitStateCandidate::Yielded);
}

#[test]
fn heavy_reinforcement_switches_ultimate_to_equilibrium_root() {
    for (as_mm2, mult, k3u) in [
        (2000.0, 345.499_657_034_373_57, 0.458_876_925_356_607_07),
        (2500.0, 368.685_154_887_046_4, 0.482_590_531_811_486_64),
    ] {
        let section = SectionInputs {
            as_mm2,
            ..reference_section()
        };
        let mc = compute_moment_curvature(&section).unwrap();
        let pair = mc.ultimate_candidates;

        assert_eq!(pair.governing, LimitStateCandidate::Equilibrium, "As={as_mm2}");
        assert_eq!(mc.ultimate.moment_knm, pair.equilibrium.moment_knm);
        assert_eq!(mc.ultimate.k, pair.equilibrium.k);
        assert_relative_eq!(mc.ultimate.moment_knm, mult, max_relative = 1e-6);
        assert_relative_eq!(mc.ultimate.k, k3u, max_relative = 1e-6);
    }
}

#[test]
fn very_deep_section_shear_is_a_domain_error() {
    let section = SectionInputs {
        d_mm: 1700.0,
        h_mm: 1800.0,
        ..reference_section()
    };
    let err = compute_shear_capacity(&section, &reference_bars(), &reference_demand()).unwrap_err();
    assert_eq!(err.error_code(), "DOMAIN_ERROR");
    assert!(err.is_engine_error());
}

#[test]
fn invalid_geometry_is_an_input_error() {
    let section = SectionInputs {
        d_mm: 520.0,
        ..reference_section()
    };
    let err = compute_moment_curvature(&section).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert!(err.is_engine_error());
}

#[test]
fn demo_project_evaluates_every_item() {
    let project = Project::from_json(include_str!("../../demos/reference_project.json")).unwrap();
    assert_eq!(project.item_count(), 3);

    let outcomes = project.evaluate_all();
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| o.result.is_ok()));

    match &outcomes[1].result {
        Ok(CalculationOutput::Shear(shear)) => {
            assert_relative_eq!(shear.vcsdt_kn, 32.085_406_592_270_59, max_relative = 1e-6)
        }
        other => panic!("expected shear output, got {other:?}"),
    }
    match &outcomes[2].result {
        Ok(CalculationOutput::DesignCheck(check)) => {
            assert!(check.passes());
            assert_eq!(check.demand.combination, "LC2a");
        }
        other => panic!("expected design check output, got {other:?}"),
    }
}

#[test]
fn project_json_round_trip() {
    let project = Project::from_json(include_str!("../../demos/reference_project.json")).unwrap();
    let json = project.to_json().unwrap();
    let again = Project::from_json(&json).unwrap();
    assert_eq!(again.item_count(), project.item_count());
    assert_eq!(again.settings, project.settings);
    for (id, item) in &project.items {
        assert_eq!(again.get_item(id).map(|i| i.label()), Some(item.label()));
    }
}
