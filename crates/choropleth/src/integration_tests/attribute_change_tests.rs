use bevy::color::Srgba;

use crate::attributes::Attribute;
use crate::scale::ScalePolicy;
use crate::settings::MapSettings;
use crate::test_harness::TestMap;
use crate::view::display_fill;

fn bar_fills(map: &TestMap) -> Vec<Srgba> {
    map.session()
        .view()
        .bars()
        .iter()
        .map(|b| display_fill(b.fill))
        .collect()
}

#[test]
fn test_change_keeps_bar_order_and_recolors() {
    let mut map = TestMap::loaded();
    let order = map.bar_order();
    let fills = bar_fills(&map);

    map.select(Attribute::PercentDemocrat);

    assert_eq!(map.session().expressed(), Attribute::PercentDemocrat);
    assert_eq!(map.bar_order(), order);
    assert_ne!(bar_fills(&map), fills);
    assert_eq!(
        map.session().view().title(),
        "Percent Democrat Vote in each state"
    );
}

#[test]
fn test_change_uses_linear_policy() {
    let mut map = TestMap::loaded();
    map.select(Attribute::PercentRepublican);
    let scale = map.session().scale();
    assert_eq!(scale.policy(), ScalePolicy::Linear);
    assert_eq!(scale.domain(), &[0.0, 100.0]);
}

#[test]
fn test_linear_fills_stay_between_palette_ends() {
    let mut map = TestMap::loaded();
    map.select(Attribute::PercentDemocrat);
    let palette = map.session().palette();
    let (lo, hi) = (palette.first(), palette.last());
    let within = |c: f32, a: f32, b: f32| c >= a.min(b) - 1e-6 && c <= a.max(b) + 1e-6;
    for bar in map.session().view().bars() {
        let fill = bar.fill.unwrap();
        assert!(within(fill.red, lo.red, hi.red), "bar {}", bar.key);
        assert!(within(fill.green, lo.green, hi.green), "bar {}", bar.key);
        assert!(within(fill.blue, lo.blue, hi.blue), "bar {}", bar.key);
    }
}

#[test]
fn test_map_and_chart_share_fill_for_a_region() {
    let mut map = TestMap::loaded();
    map.select(Attribute::PercentDemocrat);
    let view = map.session().view();
    let code = crate::region::RegionCode::from("OH");
    let region = view.regions_for(&code).next().unwrap();
    let bar = view.bars_for(&code).next().unwrap();
    assert_eq!(region.fill, bar.fill);
}

#[test]
fn test_cycle_steps_through_attributes() {
    let mut map = TestMap::loaded();
    map.cycle(true);
    assert_eq!(map.session().expressed(), Attribute::PercentDemocrat);
    map.cycle(true);
    map.cycle(true);
    assert_eq!(map.session().expressed(), Attribute::PopulationDensity);
    map.cycle(false);
    assert_eq!(map.session().expressed(), Attribute::PercentRepublican);
}

#[test]
fn test_unregistered_selection_is_ignored() {
    let settings = MapSettings {
        attributes: vec![Attribute::PopulationDensity, Attribute::PercentDemocrat],
        ..MapSettings::default()
    };
    let mut map = TestMap::with_settings(settings).with_fixture_inputs();
    let before = map.session().view().clone();

    map.select(Attribute::PercentRepublican);

    assert_eq!(map.session().expressed(), Attribute::PopulationDensity);
    assert_eq!(map.session().scale().policy(), ScalePolicy::Quantile);
    assert_eq!(map.session().view(), &before);
}

#[test]
fn test_reselecting_expressed_attribute_keeps_scale() {
    let mut map = TestMap::loaded();
    map.select(Attribute::PopulationDensity);
    assert_eq!(map.session().scale().policy(), ScalePolicy::Quantile);
}
