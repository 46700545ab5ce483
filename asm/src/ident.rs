use indexmap::IndexMap;

// name -> (line of definition, value)

#[derive(Debug, Clone, Default)]
pub struct Consts(IndexMap<String, (usize, i64)>);

impl Consts {
    pub fn new() -> Self {
        Consts(IndexMap::new())
    }

    /// Defines or overwrites a constant. Returns the line of the previous
    /// definition when one was overwritten.
    pub fn define(&mut self, name: &str, value: i64, line: usize) -> Option<usize> {
        self.0
            .insert(name.to_string(), (line, value))
            .map(|(prev, _)| prev)
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.0.get(name).map(|(_, val)| *val)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Labels(IndexMap<String, (usize, u32)>);

impl Labels {
    pub fn new() -> Self {
        Labels(IndexMap::new())
    }

    /// Binds `name` to `pc`. A name that is already bound is left untouched
    /// and the line of its first definition is returned as the error.
    pub fn define(&mut self, name: &str, pc: u32, line: usize) -> Result<(), usize> {
        if let Some((prev, _)) = self.0.get(name) {
            return Err(*prev);
        }
        self.0.insert(name.to_string(), (line, pc));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.get(name).map(|(_, pc)| *pc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_overwrite() {
        let mut consts = Consts::new();
        assert_eq!(consts.define("W", 3, 1), None);
        assert_eq!(consts.define("W", -4, 7), Some(1));
        assert_eq!(consts.get("W"), Some(-4));
        assert_eq!(consts.get("H"), None);
    }

    #[test]
    fn label_unique() {
        let mut labels = Labels::new();
        assert_eq!(labels.define("loop", 4, 2), Ok(()));
        assert_eq!(labels.define("loop", 9, 10), Err(2));
        assert_eq!(labels.get("loop"), Some(4));
        assert_eq!(labels.get("Loop"), None);
    }
}
