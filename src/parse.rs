use std::str::FromStr;

use log::debug;

use crate::error::Result;
use crate::instruction::Instruction;

/// Parsed instructions, addressed by their 0-based source line.
#[derive(Debug, Default, PartialEq)]
pub struct Program {
    insns: Vec<Instruction>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.insns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insns.is_empty()
    }

    pub fn insn_at(&self, address: usize) -> Option<&Instruction> {
        self.insns.get(address)
    }
}

pub fn parse_line(address: usize, line: &str) -> Result<Instruction> {
    Instruction::from_str(line).map_err(|e| e.at(address))
}

/// Parse lines in order. The first bad line aborts the whole program.
pub fn parse<I, S>(lines: I) -> Result<Program>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let insns = lines
        .into_iter()
        .enumerate()
        .map(|(address, line)| parse_line(address, line.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    debug!("parsed {} instructions", insns.len());
    Ok(Program { insns })
}

pub fn parse_str(source: &str) -> Result<Program> {
    parse(source.lines())
}
