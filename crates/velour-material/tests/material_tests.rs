//! Integration tests for velour-material.

use velour_material::{ClothPreset, HairPreset};

// ─── Cloth Preset Tests ───────────────────────────────────────

#[test]
fn all_cloth_presets_resolve() {
    for &preset in ClothPreset::all() {
        let props = preset.properties();
        assert!(props.density > 0.0, "{}: density", preset.name());
        assert!(
            (0.0..=1.0).contains(&props.stiffness),
            "{}: stiffness out of range",
            preset.name()
        );
        assert!((0.0..=1.0).contains(&props.damping));
        assert!((0.0..=1.0).contains(&props.friction));
        assert!((0.0..=1.0).contains(&props.wind_response));
    }
}

#[test]
fn cloth_name_roundtrip() {
    for &preset in ClothPreset::all() {
        assert_eq!(ClothPreset::from_name(preset.name()), preset);
    }
}

#[test]
fn cloth_lookup_is_case_insensitive() {
    assert_eq!(ClothPreset::from_name("SILK"), ClothPreset::Silk);
    assert_eq!(ClothPreset::from_name("Denim"), ClothPreset::Denim);
}

#[test]
fn unknown_cloth_falls_back_to_cotton() {
    assert_eq!(ClothPreset::from_name("vantablack"), ClothPreset::Cotton);
    assert_eq!(ClothPreset::from_name(""), ClothPreset::Cotton);
}

#[test]
fn particle_mass_scales_with_density() {
    let silk = ClothPreset::Silk.properties();
    let denim = ClothPreset::Denim.properties();
    assert!(denim.particle_mass() > silk.particle_mass());
    assert!(silk.particle_mass() > 0.0);
}

#[test]
fn properties_are_independent_copies() {
    let mut a = ClothPreset::Wool.properties();
    let b = ClothPreset::Wool.properties();
    a.stiffness = 0.0;
    assert!(b.stiffness > 0.0);
}

// ─── Hair Preset Tests ────────────────────────────────────────

#[test]
fn all_hair_presets_resolve() {
    for &preset in HairPreset::all() {
        let props = preset.properties();
        assert!(props.strand_count > 0);
        assert!(props.strand_length > 0.0);
        assert!((0.0..=1.0).contains(&props.curliness));
        assert!((0.0..=1.0).contains(&props.stiffness));
        assert!(props.segment_mass > 0.0);
    }
}

#[test]
fn hair_name_roundtrip() {
    for &preset in HairPreset::all() {
        assert_eq!(HairPreset::from_name(preset.name()), preset);
    }
}

#[test]
fn unknown_hair_falls_back_to_short_straight() {
    assert_eq!(
        HairPreset::from_name("mohawk"),
        HairPreset::ShortStraight
    );
}

#[test]
fn braided_is_heaviest_per_segment() {
    let braided = HairPreset::Braided.properties();
    for &preset in HairPreset::all() {
        assert!(braided.segment_mass >= preset.properties().segment_mass);
    }
}
