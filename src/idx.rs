use std::{fmt, marker::PhantomData, num::NonZeroUsize, ops};

/// A typed handle into a `Vec<T>` or [Arena]. `Option<Idx<T>>` is the same size as `Idx<T>`.
#[repr(transparent)]
pub struct Idx<T>(NonZeroUsize, PhantomData<T>);

impl<T> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.usize(), f)
    }
}

pub trait IdxDisplay {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result;
}

impl<T: IdxDisplay> fmt::Display for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fmt(f, self.usize())
    }
}

impl<T> Idx<T> {
    pub fn new(index: usize) -> Self {
        let index = index + 1;
        Self(unsafe { NonZeroUsize::new_unchecked(index) }, PhantomData)
    }

    pub fn usize(&self) -> usize {
        self.0.get() - 1
    }
}

// #[derive] does not work where type parameters do not implement the trait
// https://github.com/rust-lang/rust/issues/26925
impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        Self(self.0, PhantomData)
    }
}

impl<T> Copy for Idx<T> { }

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Idx<T> { }

impl<T> ops::Index<Idx<T>> for Vec<T> {
    type Output = T;

    fn index(&self, index: Idx<T>) -> &Self::Output {
        &self[index.usize()]
    }
}

impl<T> ops::IndexMut<Idx<T>> for Vec<T> {
    fn index_mut(&mut self, index: Idx<T>) -> &mut Self::Output {
        &mut self[index.usize()]
    }
}

impl<T> ops::Index<Idx<T>> for [T] {
    type Output = T;

    fn index(&self, index: Idx<T>) -> &Self::Output {
        &self[index.usize()]
    }
}

pub trait SliceExt<T> {
    fn iter_index(&self) -> SliceIndexIter<T>;
}

pub trait VecExt<T> : SliceExt<T> {
    fn push_get_index(&mut self, value: T) -> Idx<T>;
}

impl<T> SliceExt<T> for Vec<T> {
    fn iter_index(&self) -> SliceIndexIter<T> {
        SliceIndexIter::new(self.len())
    }
}

impl<T> VecExt<T> for Vec<T> {
    fn push_get_index(&mut self, value: T) -> Idx<T> {
        let index = Idx::new(self.len());
        self.push(value);
        index
    }
}

pub struct SliceIndexIter<T> {
    len: usize,
    index: usize,
    _t: PhantomData<fn() -> T>,
}

impl<T> SliceIndexIter<T> {
    fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            _t: PhantomData,
        }
    }
}

impl<T> Iterator for SliceIndexIter<T> {
    type Item = Idx<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.len {
            let result = Some(Idx::new(self.index));
            self.index += 1;
            result
        } else {
            None
        }
    }
}

/// Slot storage with stable [Idx] handles. Removed slots are tombstoned and reused by later inserts.
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Idx<T>>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, value: T) -> Idx<T> {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            self.slots[index.usize()] = Some(value);
            index
        } else {
            let index = Idx::new(self.slots.len());
            self.slots.push(Some(value));
            index
        }
    }

    pub fn remove(&mut self, index: Idx<T>) -> Option<T> {
        let value = self.slots.get_mut(index.usize())?.take()?;
        self.len -= 1;
        self.free.push(index);
        Some(value)
    }

    pub fn get(&self, index: Idx<T>) -> Option<&T> {
        self.slots.get(index.usize()).and_then(Option::as_ref)
    }

    pub fn contains(&self, index: Idx<T>) -> bool {
        self.get(index).is_some()
    }

    /// Number of live values
    pub fn len(&self) -> usize { self.len }

    /// Number of slots, live or vacant. Every handle satisfies `idx.usize() < slot_count()`.
    pub fn slot_count(&self) -> usize { self.slots.len() }

    pub fn iter(&self) -> impl Iterator<Item=(Idx<T>, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| slot.as_ref().map(|value| (Idx::new(i), value)))
    }
}

impl<T: IdxDisplay> ops::Index<Idx<T>> for Arena<T> {
    type Output = T;

    fn index(&self, index: Idx<T>) -> &Self::Output {
        match self.get(index) {
            Some(value) => value,
            None => panic!("{} refers to a vacant slot", index),
        }
    }
}

impl<T: IdxDisplay> ops::IndexMut<Idx<T>> for Arena<T> {
    fn index_mut(&mut self, index: Idx<T>) -> &mut Self::Output {
        match self.slots.get_mut(index.usize()).and_then(Option::as_mut) {
            Some(value) => value,
            None => panic!("{} refers to a vacant slot", index),
        }
    }
}
