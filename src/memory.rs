/*!
Memory module: the flat 64 KiB address space owned by the CPU core.

Address map:
- $0000-$00FF: zero page (fast addressing modes, indirect pointers)
- $0100-$01FF: hardware stack
- $0200-$FFFF: general purpose

There is no mirroring, banking or access control. Every `u16` address is a
valid index, so reads and writes cannot fail; callers that compute addresses
are expected to wrap them to 16 bits before calling in.
*/

/// Size of the addressable space (in bytes).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Flat, zero-initialized 64 KiB memory.
#[derive(Clone)]
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Default for Memory {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("non_zero_bytes", &used)
            .finish()
    }
}

impl Memory {
    /// Create a new memory instance initialized to 0.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Clear memory contents to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Read a little-endian word (low byte at `addr`, high byte at `addr + 1`).
    /// The second address wraps from $FFFF to $0000.
    #[inline]
    pub fn read_word_le(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Copy `bytes` into memory starting at `start`, wrapping past $FFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &b in bytes {
            self.write(addr, b);
            addr = addr.wrapping_add(1);
        }
    }

    /// Expose the whole address space read-only. Useful for diagnostics or hashing.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl std::ops::Index<u16> for Memory {
    type Output = u8;

    #[inline]
    fn index(&self, addr: u16) -> &u8 {
        &self.data[addr as usize]
    }
}

impl std::ops::IndexMut<u16> for Memory {
    #[inline]
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.data[addr as usize]
    }
}
