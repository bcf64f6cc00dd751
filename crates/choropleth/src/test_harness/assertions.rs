//! Assertion helpers for `TestMap` integration tests.

use crate::config::{BAR_STROKE, HIGHLIGHT_STROKE, REGION_STROKE};
use crate::region::RegionCode;

use super::TestMap;

impl TestMap {
    /// Bar keys left to right.
    pub fn bar_order(&self) -> Vec<String> {
        self.session()
            .view()
            .bars()
            .iter()
            .map(|b| b.key.to_string())
            .collect()
    }

    /// Assert exactly the elements keyed `code` carry the highlight stroke,
    /// in both panels.
    pub fn assert_only_highlighted(&self, code: &str) {
        let code = RegionCode::from(code);
        let view = self.session().view();
        let mut emphasized = 0;
        for region in view.regions() {
            let expected = if region.key == code { HIGHLIGHT_STROKE } else { REGION_STROKE };
            assert_eq!(region.stroke, expected, "map region {} stroke", region.key);
            emphasized += usize::from(region.key == code);
        }
        for bar in view.bars() {
            let expected = if bar.key == code { HIGHLIGHT_STROKE } else { BAR_STROKE };
            assert_eq!(bar.stroke, expected, "bar {} stroke", bar.key);
            emphasized += usize::from(bar.key == code);
        }
        assert!(emphasized > 0, "Expected some element keyed {code}");
    }

    /// Assert every element is back at its original stroke.
    pub fn assert_nothing_highlighted(&self) {
        let view = self.session().view();
        for region in view.regions() {
            assert_eq!(region.stroke, region.original_stroke, "map region {}", region.key);
        }
        for bar in view.bars() {
            assert_eq!(bar.stroke, bar.original_stroke, "bar {}", bar.key);
        }
        assert!(
            self.session().highlight().label().is_none(),
            "Expected no info label"
        );
    }
}
