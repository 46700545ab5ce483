use crate::{error::LineError, image::Image, layout::Layout};

/// Second pass: encodes every placed instruction against the final tables.
pub fn encode(layout: &Layout) -> Result<Image, LineError> {
    let mut image = Image::new();
    for placement in &layout.placements {
        let inst = placement
            .code
            .resolve(&layout.consts, &layout.labels)
            .map_err(|err| err.at(placement.line))?;
        image.store(placement.addr, inst.to_word().to_bin());
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, parser::parse_source};

    fn run(src: &str) -> Result<Image, LineError> {
        let lines = parse_source(src);
        let layout = Layout::run(&lines)?;
        encode(&layout)
    }

    #[test]
    fn forward_reference() {
        let image = run("jump end\nldcmd r1\nend:\nblit 0\n").unwrap();
        assert_eq!(image.get(0), 0x4_0002);
        assert_eq!(image.get(2), 0x5_0000);
    }

    #[test]
    fn later_placement_wins() {
        let image = run("ldcmd r1\n.org 0\nldcmd r2\n").unwrap();
        assert_eq!(image.get(0), 0x4_8800);
        assert_eq!(image.used(), 1);
    }

    #[test]
    fn error_names_line() {
        let err = run("ldcmd r1\n\n  beqz r1, missing\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(err.error, Error::UnknownLabel(ref l) if l == "missing"));
    }

    #[test]
    fn first_bad_placement_wins() {
        let err = run("jump x\nfoo r1\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(err.error, Error::UnknownLabel(ref l) if l == "x"));

        let err = run("ldcmd r1\nhalt\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.error, Error::UnknownOpcode(ref op) if op == "halt"));
    }
}
