pub const RAM_SIZE: usize = 0x800;

/// Internal work RAM. $0000-$1FFF are four copies of the same 2 KiB.
pub struct Memory {
    pub(crate) ram: [u8; RAM_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory { ram: [0; RAM_SIZE] }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.ram[Self::mirror(addr)]
    }

    pub fn write(&mut self, addr: u16, data: u8) {
        self.ram[Self::mirror(addr)] = data;
    }

    #[inline]
    fn mirror(addr: u16) -> usize {
        (addr as usize) & (RAM_SIZE - 1)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.ram
    }

    // Save state methods
    pub fn get_ram(&self) -> [u8; RAM_SIZE] {
        self.ram
    }

    pub fn set_ram(&mut self, ram: [u8; RAM_SIZE]) {
        self.ram = ram;
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
