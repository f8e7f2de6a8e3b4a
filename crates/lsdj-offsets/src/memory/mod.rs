//! Typed access to LSDj's working RAM through resolved offsets.

mod ram;

pub use ram::{DEFAULT_TEMPO, Ram, ScreenType};

/// Byte-addressable memory region
pub trait MemoryAccess {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_u8(&self, offset: usize) -> Option<u8>;

    /// Returns false when the offset is out of range
    fn write_u8(&mut self, offset: usize, value: u8) -> bool;
}

impl MemoryAccess for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn read_u8(&self, offset: usize) -> Option<u8> {
        self.get(offset).copied()
    }

    fn write_u8(&mut self, offset: usize, value: u8) -> bool {
        match self.get_mut(offset) {
            Some(byte) => {
                *byte = value;
                true
            }
            None => false,
        }
    }
}

impl MemoryAccess for Vec<u8> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn read_u8(&self, offset: usize) -> Option<u8> {
        self.as_slice().read_u8(offset)
    }

    fn write_u8(&mut self, offset: usize, value: u8) -> bool {
        self.as_mut_slice().write_u8(offset, value)
    }
}

impl<T: MemoryAccess + ?Sized> MemoryAccess for &mut T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn read_u8(&self, offset: usize) -> Option<u8> {
        (**self).read_u8(offset)
    }

    fn write_u8(&mut self, offset: usize, value: u8) -> bool {
        (**self).write_u8(offset, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_access() {
        let mut data = [0u8; 4];
        let region: &mut [u8] = &mut data;
        assert!(region.write_u8(3, 7));
        assert!(!region.write_u8(4, 7));
        assert_eq!(region.read_u8(3), Some(7));
        assert_eq!(region.read_u8(4), None);
        assert_eq!(MemoryAccess::len(&*region), 4);
    }

    #[test]
    fn test_vec_access_through_reference() {
        let mut data = vec![0u8; 2];
        {
            let borrowed = &mut data;
            assert!(borrowed.write_u8(1, 0xAB));
            assert!(!MemoryAccess::is_empty(&borrowed));
        }
        assert_eq!(data[1], 0xAB);
    }
}
