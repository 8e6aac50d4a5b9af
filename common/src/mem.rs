// Little-endian words in byte buffers. Out of range accesses return None
// rather than panicking.

pub trait GetU16 {
    fn get_u16(&self, offset: usize) -> Option<u16>;
}

impl GetU16 for [u8] {
    fn get_u16(&self, offset: usize) -> Option<u16> {
        let src = self.get(offset..offset.checked_add(2)?)?;
        let lower = src[0] as u16;
        let upper = src[1] as u16;
        Some(lower | (upper << u8::BITS))
    }
}

////////////////////////////////////////////////////////////////////////////////

pub trait PutU16 {
    fn put_u16(&mut self, offset: usize, val: u16) -> Option<()>;
}

impl PutU16 for [u8] {
    fn put_u16(&mut self, offset: usize, val: u16) -> Option<()> {
        let dst = self.get_mut(offset..offset.checked_add(2)?)?;
        dst[0] = val as u8;
        dst[1] = (val >> u8::BITS) as u8;
        Some(())
    }
}
