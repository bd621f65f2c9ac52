//! Last-used directories per direction, kept for the life of the process

use std::path::{Path, PathBuf};

use super::types::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DirectoryPair {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
}

#[derive(Debug, Clone)]
pub(crate) struct DirectoryMemory {
    compile: DirectoryPair,
    decompile: DirectoryPair,
}

impl DirectoryMemory {
    /// Both directions start from the same pair of directories
    pub(crate) fn new(input: &Path, output: &Path) -> Self {
        let pair = DirectoryPair {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        };
        DirectoryMemory {
            compile: pair.clone(),
            decompile: pair,
        }
    }

    pub(crate) fn get(&self, direction: Direction) -> &DirectoryPair {
        match direction {
            Direction::Compile => &self.compile,
            Direction::Decompile => &self.decompile,
        }
    }

    fn get_mut(&mut self, direction: Direction) -> &mut DirectoryPair {
        match direction {
            Direction::Compile => &mut self.compile,
            Direction::Decompile => &mut self.decompile,
        }
    }

    /// Remember the directory holding `first_input`
    pub(crate) fn remember_input(&mut self, direction: Direction, first_input: &Path) {
        let dir = match first_input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        self.get_mut(direction).input = dir;
    }

    pub(crate) fn remember_output(&mut self, direction: Direction, output_dir: &Path) {
        self.get_mut(direction).output = output_dir.to_path_buf();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> DirectoryMemory {
        DirectoryMemory::new(Path::new("./data"), Path::new("./output"))
    }

    #[test]
    fn starts_from_defaults() {
        let m = memory();
        for d in [Direction::Compile, Direction::Decompile] {
            assert_eq!(m.get(d).input, PathBuf::from("./data"));
            assert_eq!(m.get(d).output, PathBuf::from("./output"));
        }
    }

    #[test]
    fn remember_input_uses_parent() {
        let mut m = memory();
        m.remember_input(Direction::Compile, Path::new("/scripts/e00/e00_001.txt"));
        assert_eq!(m.get(Direction::Compile).input, PathBuf::from("/scripts/e00"));
    }

    #[test]
    fn remember_input_bare_file_name() {
        let mut m = memory();
        m.remember_input(Direction::Decompile, Path::new("e00_001.lin"));
        assert_eq!(m.get(Direction::Decompile).input, PathBuf::from("."));
    }

    #[test]
    fn directions_are_independent() {
        let mut m = memory();
        m.remember_output(Direction::Decompile, Path::new("/tmp/decoded"));
        assert_eq!(
            m.get(Direction::Decompile).output,
            PathBuf::from("/tmp/decoded")
        );
        assert_eq!(m.get(Direction::Compile).output, PathBuf::from("./output"));
    }
}
