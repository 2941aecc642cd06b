// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Capability tier implementations for the standard containers and [`SmallVec`].
//!
//! Inherent methods are called with fully qualified syntax so that they never resolve
//! back to the trait method that is being defined.

use std::collections::VecDeque;

use smallvec::{Array, SmallVec};

use super::{Mutable, Readable, Resizable};

mod slice_impl {
    use super::*;

    impl<T> Readable for [T] {
        type Item = T;

        fn len(&self) -> usize { <[T]>::len(self) }

        fn get(&self, index: usize) -> Option<&T> { <[T]>::get(self, index) }
    }

    impl<T> Mutable for [T] {
        fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            <[T]>::get_mut(self, index)
        }

        fn swap(&mut self, a: usize, b: usize) { <[T]>::swap(self, a, b); }
    }
}

mod array_impl {
    use super::*;

    impl<T, const N: usize> Readable for [T; N] {
        type Item = T;

        fn len(&self) -> usize { N }

        fn get(&self, index: usize) -> Option<&T> { self.as_slice().get(index) }
    }

    impl<T, const N: usize> Mutable for [T; N] {
        fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            self.as_mut_slice().get_mut(index)
        }

        fn swap(&mut self, a: usize, b: usize) { self.as_mut_slice().swap(a, b); }
    }
}

mod vec_impl {
    use super::*;

    impl<T> Readable for Vec<T> {
        type Item = T;

        fn len(&self) -> usize { Vec::len(self) }

        fn get(&self, index: usize) -> Option<&T> { self.as_slice().get(index) }
    }

    impl<T> Mutable for Vec<T> {
        fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            self.as_mut_slice().get_mut(index)
        }

        fn swap(&mut self, a: usize, b: usize) { self.as_mut_slice().swap(a, b); }
    }

    impl<T> Resizable for Vec<T> {
        fn insert_at(&mut self, index: usize, value: T) { Vec::insert(self, index, value); }

        fn remove_at(&mut self, index: usize) -> Option<T> {
            (index < Vec::len(self)).then(|| Vec::remove(self, index))
        }

        fn push_back(&mut self, value: T) { Vec::push(self, value); }

        fn remove_range(&mut self, start: usize, count: usize) {
            let len = Vec::len(self);
            let start = start.min(len);
            let end = start.saturating_add(count).min(len);
            drop(self.drain(start..end));
        }

        fn remove_all(&mut self) { Vec::clear(self); }
    }
}

mod vec_deque_impl {
    use super::*;

    impl<T> Readable for VecDeque<T> {
        type Item = T;

        fn len(&self) -> usize { VecDeque::len(self) }

        fn get(&self, index: usize) -> Option<&T> { VecDeque::get(self, index) }
    }

    impl<T> Mutable for VecDeque<T> {
        fn get_mut(&mut self, index: usize) -> Option<&mut T> {
            VecDeque::get_mut(self, index)
        }

        fn swap(&mut self, a: usize, b: usize) { VecDeque::swap(self, a, b); }
    }

    impl<T> Resizable for VecDeque<T> {
        fn insert_at(&mut self, index: usize, value: T) {
            VecDeque::insert(self, index, value);
        }

        fn remove_at(&mut self, index: usize) -> Option<T> { VecDeque::remove(self, index) }

        fn push_back(&mut self, value: T) { VecDeque::push_back(self, value); }

        fn remove_all(&mut self) { VecDeque::clear(self); }
    }
}

mod small_vec_impl {
    use super::*;

    impl<A: Array> Readable for SmallVec<A> {
        type Item = A::Item;

        fn len(&self) -> usize { SmallVec::len(self) }

        fn get(&self, index: usize) -> Option<&A::Item> { self.as_slice().get(index) }
    }

    impl<A: Array> Mutable for SmallVec<A> {
        fn get_mut(&mut self, index: usize) -> Option<&mut A::Item> {
            self.as_mut_slice().get_mut(index)
        }

        fn swap(&mut self, a: usize, b: usize) { self.as_mut_slice().swap(a, b); }
    }

    impl<A: Array> Resizable for SmallVec<A> {
        fn insert_at(&mut self, index: usize, value: A::Item) {
            SmallVec::insert(self, index, value);
        }

        fn remove_at(&mut self, index: usize) -> Option<A::Item> {
            (index < SmallVec::len(self)).then(|| SmallVec::remove(self, index))
        }

        fn push_back(&mut self, value: A::Item) { SmallVec::push(self, value); }

        fn remove_all(&mut self) { SmallVec::clear(self); }
    }
}
