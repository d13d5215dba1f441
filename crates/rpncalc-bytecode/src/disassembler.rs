// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// diagnostic-only pretty-printer for a decoded bytecode stream; has no
// effect on execution semantics. follows the teacher project's
// `print_bytecode_as_text`/`print_bytecode_as_binary` split: one view for
// humans reading mnemonics, one for humans reading raw hex.

use crate::buffer::ByteCodeBuffer;

/// one instruction per line: `<mnemonic>` or `<mnemonic> <immediate>`.
pub fn disassemble_as_text(buffer: &ByteCodeBuffer) -> String {
    let mut lines = Vec::new();
    for decoded in buffer.instructions() {
        match decoded {
            Ok(instruction) => match instruction.immediate {
                Some(value) => lines.push(format!("{} {}", instruction.opcode.mnemonic(), value)),
                None => lines.push(instruction.opcode.mnemonic().to_string()),
            },
            Err(error) => lines.push(format!("<{}>", error)),
        }
    }
    lines.join("\n")
}

/// hex dump, 8 bytes per row, in the style of `0x0000  00 11 22 33  44 55 66 77`.
pub fn disassemble_as_hex(buffer: &ByteCodeBuffer) -> String {
    buffer
        .as_slice()
        .chunks(8)
        .enumerate()
        .map(|(row, chunk)| {
            let hex = chunk
                .iter()
                .enumerate()
                .map(|(idx, byte)| {
                    if idx == 4 {
                        format!("  {:02x}", byte)
                    } else if idx == 0 {
                        format!("{:02x}", byte)
                    } else {
                        format!(" {:02x}", byte)
                    }
                })
                .collect::<String>();
            format!("0x{:04x}  {}", row * 8, hex)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
