//! Interpreter for a four-instruction register language.
//!
//! ```text
//! MOV dst src    dst = src (literal or register)
//! INC reg        reg += 1
//! DEC reg        reg -= 1
//! JNZ cond off   if cond != 0 { pc += off } else { pc += 1 }
//! ```
//!
//! A program halts when the program counter leaves it. Errors abort the run;
//! drive a [`Cpu`] directly to inspect registers after a failure.

pub mod config;
pub mod cpu;
pub mod error;
pub mod instruction;
pub mod parse;

pub use config::Config;
pub use cpu::{Cpu, Registers};
pub use error::{Error, Result};
pub use instruction::{Instruction, Operand};
pub use parse::Program;

pub fn interpret<I, S>(program: I) -> Result<Registers>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    interpret_with(program, &Config::default())
}

pub fn interpret_with<I, S>(program: I, config: &Config) -> Result<Registers>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cpu = Cpu::new(parse::parse(program)?);
    cpu.run(config)?;
    Ok(cpu.into_registers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::NUM_ARGS_ERR;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn regs(pairs: &[(&str, i32)]) -> Registers {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn mov_then_inc_adds_one() {
        init();
        assert_eq!(interpret(["mov a -3", "inc a"]).unwrap(), regs(&[("a", -2)]));
    }

    #[test]
    fn mov_copies_register() {
        init();
        assert_eq!(
            interpret(["MOV a 5", "MOV b a"]).unwrap(),
            regs(&[("a", 5), ("b", 5)])
        );
    }

    #[test]
    fn decrement_loop() {
        init();
        let program = ["mov a 5", "mov b 0", "inc b", "dec a", "jnz a -2"];
        assert_eq!(interpret(program).unwrap(), regs(&[("a", 0), ("b", 5)]));
    }

    #[test]
    fn jump_skips_line() {
        init();
        let program = ["mov a 1", "mov b 2", "jnz a 2", "mov b 3", "inc a"];
        assert_eq!(interpret(program).unwrap(), regs(&[("a", 2), ("b", 2)]));
    }

    #[test]
    fn longer_program() {
        init();
        let program = vec![
            "mov c 12".to_string(),
            "mov b 0".to_string(),
            "mov a 200".to_string(),
            "dec a".to_string(),
            "inc b".to_string(),
            "jnz a -2".to_string(),
            "dec c".to_string(),
            "mov a b".to_string(),
            "jnz c -5".to_string(),
            "jnz 0 1".to_string(),
            "mov c a".to_string(),
        ];
        assert_eq!(
            interpret(&program).unwrap(),
            regs(&[("a", 409600), ("b", 409600), ("c", 409600)])
        );
    }

    #[test]
    fn jump_backwards_out_of_program_keeps_registers() {
        init();
        assert_eq!(
            interpret(["mov a 7", "jnz a -10", "mov a 8"]).unwrap(),
            regs(&[("a", 7)])
        );
    }

    #[test]
    fn unwritten_registers_are_absent() {
        init();
        let r = interpret(["mov a 0", "jnz a 2", "mov b 1"]).unwrap();
        assert_eq!(r.get("b"), Some(&1));
        let r = interpret(["mov a 1", "jnz a 2", "mov b 1"]).unwrap();
        assert!(!r.contains_key("b"));
        assert!(interpret(Vec::<&str>::new()).unwrap().is_empty());
    }

    #[test]
    fn non_ascii_digits_name_registers() {
        init();
        assert_eq!(
            interpret(["mov ٣ 1", "inc ٣", "mov x ٣"]).unwrap(),
            regs(&[("٣", 2), ("x", 2)])
        );
    }

    #[test]
    fn errors_are_fatal() {
        init();
        assert_eq!(
            interpret(["mov a"]).unwrap_err(),
            Error::MalformedInstruction { line: 0, reason: NUM_ARGS_ERR }
        );
        assert_eq!(
            interpret(["xyz a b"]).unwrap_err(),
            Error::InvalidOpcode { line: 0, opcode: "xyz".to_string() }
        );
        assert_eq!(
            interpret(["mov a 1", "jnz b 1"]).unwrap_err(),
            Error::UnboundRegister { line: 1, register: "b".to_string() }
        );
        assert_eq!(
            interpret(["dec b"]).unwrap_err(),
            Error::UnboundRegister { line: 0, register: "b".to_string() }
        );
        assert_eq!(
            interpret(["mov a b"]).unwrap_err(),
            Error::UnboundRegister { line: 0, register: "b".to_string() }
        );
    }

    #[test]
    fn infinite_loop_hits_step_limit() {
        init();
        let config = Config::new().with_max_steps(1000);
        let err = interpret_with(["mov a 1", "inc a", "jnz a -1"], &config).unwrap_err();
        assert_eq!(err, Error::StepLimitExceeded { limit: 1000 });
        assert_eq!(err.to_string(), "step limit of 1000 instructions exceeded");
    }
}
