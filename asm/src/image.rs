use arch::ROM_SIZE;
use std::{collections::BTreeMap, io::Write};

/// Program memory contents. Addresses never stored read back as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image(BTreeMap<u16, u32>);

impl Image {
    pub fn new() -> Self {
        Image(BTreeMap::new())
    }

    /// Returns the word previously stored at `addr`, if any.
    pub fn store(&mut self, addr: u16, word: u32) -> Option<u32> {
        self.0.insert(addr, word)
    }

    pub fn get(&self, addr: u16) -> u32 {
        self.0.get(&addr).copied().unwrap_or(0)
    }

    /// Number of addresses explicitly written.
    pub fn used(&self) -> usize {
        self.0.len()
    }

    /// Every word from address 0 to `ROM_SIZE - 1`.
    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        (0..ROM_SIZE as u16).map(|addr| self.get(addr))
    }

    /// Writes all `ROM_SIZE` words, one 5-digit upper-case hex word per line.
    pub fn write_hex<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for word in self.words() {
            writeln!(out, "{:05X}", word)?;
        }
        Ok(())
    }

    pub fn to_hex(&self) -> String {
        self.words().map(|word| format!("{:05X}\n", word)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_image() {
        let hex = Image::new().to_hex();
        assert_eq!(hex.lines().count(), ROM_SIZE);
        assert!(hex.lines().all(|l| l == "00000"));
        assert!(hex.ends_with("00000\n"));
    }

    #[test]
    fn sparse_words() {
        let mut image = Image::new();
        assert_eq!(image.store(0, 0x5_8443), None);
        image.store(1023, 0xABC);
        assert_eq!(image.store(0, 0x0_0443), Some(0x5_8443));
        assert_eq!(image.used(), 2);

        let hex = image.to_hex();
        let lines: Vec<&str> = hex.lines().collect();
        assert_eq!(lines.len(), ROM_SIZE);
        assert_eq!(lines[0], "00443");
        assert_eq!(lines[1], "00000");
        assert_eq!(lines[1023], "00ABC");
    }

    #[test]
    fn writer_matches_string() {
        let mut image = Image::new();
        image.store(5, 0x7_FFFF);
        image.store(512, 0x1);
        let mut buf = vec![];
        image.write_hex(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), image.to_hex());
        assert_eq!(image.words().count(), ROM_SIZE);
        assert_eq!(image.words().nth(5), Some(0x7_FFFF));
    }
}
