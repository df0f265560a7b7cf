use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::instruction::{Instruction, Operand, Register};
use crate::parse::Program;

pub type Registers = HashMap<Register, i32>;

pub struct Cpu {
    pc: i64,
    steps: u64,
    registers: Registers,
    program: Program,
}

impl Cpu {
    pub fn new(program: Program) -> Cpu {
        Cpu { pc: 0,
              steps: 0,
              registers: Registers::new(),
              program,
        }
    }

    /// Execute the instruction at pc.
    ///
    /// Returns false once pc has left the program. Register state is kept on
    /// error so callers can inspect where the program went wrong.
    pub fn execute(&mut self) -> Result<bool> {
        let address = match self.address() {
            Some(a) => a,
            None => return Ok(false),
        };
        let insn = match self.program.insn_at(address) {
            Some(i) => i,
            None => return Ok(false),
        };
        trace!("{:4}: {}", address, insn);

        let next = match *insn {
            Instruction::MOV { ref dst, ref src } => {
                let v = resolve(&self.registers, src, address)?;
                self.registers.insert(dst.clone(), v);
                address as i64 + 1
            },
            Instruction::INC { ref reg } => {
                let v = read(&self.registers, reg, address)?;
                self.registers.insert(reg.clone(), v.wrapping_add(1));
                address as i64 + 1
            },
            Instruction::DEC { ref reg } => {
                let v = read(&self.registers, reg, address)?;
                self.registers.insert(reg.clone(), v.wrapping_sub(1));
                address as i64 + 1
            },
            Instruction::JNZ { ref cond, offset } => {
                if resolve(&self.registers, cond, address)? != 0 {
                    address as i64 + offset as i64
                } else {
                    address as i64 + 1
                }
            },
        };
        self.pc = next;
        self.steps += 1;
        Ok(!self.is_halted())
    }

    /// Run until pc leaves the program or `config.max_steps` instructions have executed.
    pub fn run(&mut self, config: &Config) -> Result<()> {
        while !self.is_halted() {
            if self.steps >= config.max_steps {
                warn!("giving up at pc {} after {} steps", self.pc, self.steps);
                return Err(Error::StepLimitExceeded { limit: config.max_steps });
            }
            self.execute()?;
        }
        debug!("halted at pc {} after {} steps", self.pc, self.steps);
        Ok(())
    }

    pub fn is_halted(&self) -> bool {
        self.address().is_none()
    }

    pub fn pc(&self) -> i64 {
        self.pc
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn into_registers(self) -> Registers {
        self.registers
    }

    fn address(&self) -> Option<usize> {
        usize::try_from(self.pc).ok().filter(|&a| a < self.program.len())
    }
}

fn read(registers: &Registers, reg: &Register, address: usize) -> Result<i32> {
    registers.get(reg).copied().ok_or_else(|| Error::UnboundRegister {
        line: address,
        register: reg.clone(),
    })
}

fn resolve(registers: &Registers, op: &Operand, address: usize) -> Result<i32> {
    match op {
        Operand::Lit(i) => Ok(*i),
        Operand::Reg(r) => read(registers, r, address),
    }
}
