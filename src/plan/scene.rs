//! Scene plan: the ordered set of placed elements of one document

use crate::draw::geometry::{BeamDrawing, GeometryError};
use super::definition::FixtureDefinition;
use super::elements::{Fixture, MountingRail, StageElement, TextLabel};
use serde::{Deserialize, Serialize};

/// All elements placed on a stage plan
///
/// Element order is kept for drawing, but two plans compare equal when they
/// hold the same elements in any order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenePlan {
    elements: Vec<StageElement>,
}

impl ScenePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<StageElement>) -> Self {
        ScenePlan { elements }
    }

    /// Append an element and return its index
    pub fn add(&mut self, element: impl Into<StageElement>) -> usize {
        self.elements.push(element.into());
        self.elements.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<StageElement> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    /// Remove the first element structurally equal to `element`
    pub fn remove_element(&mut self, element: &StageElement) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&StageElement> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut StageElement> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StageElement> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[StageElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn rails(&self) -> impl Iterator<Item = &MountingRail> {
        self.elements.iter().filter_map(|e| match e {
            StageElement::Rail(rail) => Some(rail),
            _ => None,
        })
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.elements.iter().filter_map(|e| match e {
            StageElement::Fixture(fixture) => Some(fixture),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &TextLabel> {
        self.elements.iter().filter_map(|e| match e {
            StageElement::Label(label) => Some(label),
            _ => None,
        })
    }

    /// Distinct fixture definitions in first-seen order
    pub fn catalog(&self) -> Vec<FixtureDefinition> {
        let mut catalog: Vec<FixtureDefinition> = Vec::new();
        for fixture in self.fixtures() {
            if !catalog.iter().any(|d| d.same_as(&fixture.definition)) {
                catalog.push(fixture.definition.clone());
            }
        }
        catalog
    }

    /// First rail the fixture sits on
    pub fn supporting_rail(&self, fixture: &Fixture) -> Option<&MountingRail> {
        let bounds = fixture.bounds();
        self.rails().find(|rail| rail.bounds().intersects(&bounds))
    }

    /// Beam of a fixture hanging from a rail; `None` when it is not on one
    pub fn beam_for(&self, fixture: &Fixture, max_alpha: u8) -> Option<Result<BeamDrawing, GeometryError>> {
        let rail = self.supporting_rail(fixture)?;
        Some(BeamDrawing::new(
            rail.height_from_floor as f64,
            fixture.field_angle as f64,
            fixture.tilt as f64,
            fixture.rotation as f64,
            fixture.beam_tint.to_array(),
            fixture.beam_intensity(),
            max_alpha,
        ))
    }
}

impl PartialEq for ScenePlan {
    fn eq(&self, other: &Self) -> bool {
        if self.elements.len() != other.elements.len() {
            return false;
        }

        // Multiset match: every element consumes one equal counterpart
        let mut used = vec![false; other.elements.len()];
        self.elements.iter().all(|element| {
            let found = other
                .elements
                .iter()
                .enumerate()
                .position(|(i, candidate)| !used[i] && candidate == element);
            match found {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl<'a> IntoIterator for &'a ScenePlan {
    type Item = &'a StageElement;
    type IntoIter = std::slice::Iter<'a, StageElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<StageElement> for ScenePlan {
    fn from_iter<I: IntoIterator<Item = StageElement>>(iter: I) -> Self {
        ScenePlan { elements: iter.into_iter().collect() }
    }
}
