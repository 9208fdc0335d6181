//! Fixed-capacity, slot-reusing collection of solutions.

use super::types::Solution;
use std::ops::{Index, IndexMut};

/// An ordered collection of [`Solution`]s built from a template.
///
/// The set is an arena: `clear` only resets the logical length, and the
/// backing slots keep their allocations for the next generation. Every slot
/// exposed by [`resize`](Self::resize) or [`push_template`](Self::push_template)
/// is reset to an independent copy of the template, so no two elements alias.
///
/// # Examples
///
/// ```
/// use u_realcoded::solution::{Solution, SolutionSet};
///
/// let mut set = SolutionSet::new(Solution::new(2));
/// set.resize(5);
/// assert_eq!(set.len(), 5);
///
/// set.clear();
/// assert!(set.is_empty());
/// assert_eq!(set.capacity(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct SolutionSet {
    template: Solution,
    slots: Vec<Solution>,
    len: usize,
}

impl SolutionSet {
    /// Creates an empty set whose elements are cloned from `template`.
    pub fn new(template: Solution) -> Self {
        Self {
            template,
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Creates a set holding `size` copies of `template`.
    pub fn with_size(template: Solution, size: usize) -> Self {
        let mut set = Self::new(template);
        set.resize(size);
        set
    }

    pub fn template(&self) -> &Solution {
        &self.template
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots allocated so far, live or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drops every element logically; allocations are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Sets the length to `size`.
    ///
    /// Newly exposed slots are reset to the template. Shrinking keeps the
    /// surviving prefix untouched.
    pub fn resize(&mut self, size: usize) {
        for i in self.len..size {
            self.reset_slot(i);
        }
        self.len = size;
    }

    /// Appends a fresh copy of the template and returns it for writing.
    pub fn push_template(&mut self) -> &mut Solution {
        let i = self.len;
        self.reset_slot(i);
        self.len += 1;
        &mut self.slots[i]
    }

    /// Appends a copy of `solution`.
    pub fn push_copy(&mut self, solution: &Solution) {
        let i = self.len;
        if i < self.slots.len() {
            self.slots[i].copy_from(solution);
        } else {
            self.slots.push(solution.clone());
        }
        self.len += 1;
    }

    /// Overwrites the element at `index` with a copy of `solution`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn replace(&mut self, index: usize, solution: &Solution) {
        self.as_mut_slice()[index].copy_from(solution);
    }

    pub fn get(&self, index: usize) -> Option<&Solution> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Solution> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.slots[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [Solution] {
        &mut self.slots[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Solution> {
        self.as_mut_slice().iter_mut()
    }

    fn reset_slot(&mut self, i: usize) {
        if i < self.slots.len() {
            self.slots[i].copy_from(&self.template);
        } else {
            self.slots.push(self.template.clone());
        }
    }
}

impl Index<usize> for SolutionSet {
    type Output = Solution;

    fn index(&self, index: usize) -> &Solution {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for SolutionSet {
    fn index_mut(&mut self, index: usize) -> &mut Solution {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut SolutionSet {
    type Item = &'a mut Solution;
    type IntoIter = std::slice::IterMut<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::Status;

    #[test]
    fn test_resize_clones_template() {
        let mut set = SolutionSet::new(Solution::new(3));
        set.resize(4);
        assert_eq!(set.len(), 4);
        for s in &set {
            assert_eq!(s.dimension(), 3);
            assert_eq!(s.status(), Status::Unevaluated);
        }
    }

    #[test]
    fn test_elements_do_not_alias() {
        let mut set = SolutionSet::with_size(Solution::new(2), 3);
        set[0].vector_mut()[0] = 7.0;
        assert_eq!(set[1].vector()[0], 0.0);
        assert_eq!(set.template().vector()[0], 0.0);
    }

    #[test]
    fn test_clear_keeps_slots_and_resize_resets_them() {
        let mut set = SolutionSet::with_size(Solution::new(2), 3);
        set[1].vector_mut()[1] = 5.0;
        set[1].set_evaluation(1.0, Status::Feasible);

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 3);

        set.resize(2);
        assert_eq!(set[1].vector(), &[0.0, 0.0]);
        assert_eq!(set[1].status(), Status::Unevaluated);
        assert_eq!(set.capacity(), 3);
    }

    #[test]
    fn test_shrink_keeps_prefix() {
        let mut set = SolutionSet::with_size(Solution::new(1), 3);
        set[0].vector_mut()[0] = 1.5;
        set.resize(1);
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].vector()[0], 1.5);
    }

    #[test]
    fn test_push_template_and_push_copy() {
        let mut set = SolutionSet::new(Solution::new(2));
        set.push_template().vector_mut()[0] = 4.0;

        let mut other = Solution::from_vector(vec![1.0, 1.0]);
        other.set_evaluation(2.0, Status::Feasible);
        set.push_copy(&other);

        assert_eq!(set.len(), 2);
        assert_eq!(set[0].vector(), &[4.0, 0.0]);
        assert_eq!(set[1], other);

        // Reused slot after clear must start from the template again.
        set.clear();
        let fresh = set.push_template();
        assert_eq!(fresh.vector(), &[0.0, 0.0]);
        assert_eq!(fresh.status(), Status::Unevaluated);
    }

    #[test]
    fn test_get_respects_logical_length() {
        let mut set = SolutionSet::with_size(Solution::new(1), 2);
        set.clear();
        assert!(set.get(0).is_none());
        assert!(set.as_slice().is_empty());
    }
}
