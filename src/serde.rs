// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`SimpleVector`](crate::SimpleVector).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence, growing through
//!   [`push_back`](crate::SimpleVector::push_back).
//!
//! ### Trait bounds
//!
//! Deserialization requires `T: Deserialize<'de> + Default`, because every
//! slot of the backing buffer is constructed.
//!
//! The length hint of the input only pre-sizes the buffer up to a fixed cap,
//! so a hostile hint cannot force a huge allocation up front.

// Crate imports
use crate::vec::SimpleVector;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

/// Upper bound on the capacity taken from a sequence's size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for SimpleVector<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = SimpleVector<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let capacity = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = SimpleVector::<T>::new();
        out.try_reserve(capacity).map_err(<A::Error as de::Error>::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.try_resize(out.len() + 1).map_err(<A::Error as de::Error>::custom)?;
            let last = out.len() - 1;
            out[last] = elem;
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for SimpleVector<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}
