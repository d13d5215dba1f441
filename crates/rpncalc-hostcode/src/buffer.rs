// Copyright (c) 2026, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE and CONTRIBUTING.

// a page-sized region mapped read+write+execute, acquired via `mmap` exactly
// as the reference implementation does. the region is never resized: once
// mapped it stays the same size and address for the life of the buffer, so
// pointers handed out by `begin`/`cursor_ptr` remain stable.

use std::ptr;

use rpncalc_types::{CalculatorError, CalculatorResult};

/// the one-byte `ret` opcode the page is pre-filled with, so a stray jump
/// into an unwritten tail returns cleanly instead of running garbage.
const RET_OPCODE: u8 = 0xc3;

pub struct HostCodeBuffer {
    base: *mut u8,
    length: usize,
    cursor: usize,
}

impl HostCodeBuffer {
    pub fn new() -> CalculatorResult<Self> {
        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if page_size <= 0 {
            return Err(CalculatorError::AllocFailed {
                reason: "could not query system page size".to_string(),
            });
        }
        let length = page_size as usize;

        let base = unsafe {
            libc::mmap(
                ptr::null_mut(),
                length,
                libc::PROT_READ | libc::PROT_WRITE | libc::PROT_EXEC,
                libc::MAP_ANON | libc::MAP_PRIVATE,
                -1,
                0,
            )
        };

        if base == libc::MAP_FAILED {
            return Err(CalculatorError::AllocFailed {
                reason: std::io::Error::last_os_error().to_string(),
            });
        }

        let mut buffer = Self {
            base: base as *mut u8,
            length,
            cursor: 0,
        };
        buffer.reset();
        Ok(buffer)
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn begin(&self) -> *const u8 {
        self.base
    }

    pub fn cursor_ptr(&self) -> *const u8 {
        unsafe { self.base.add(self.cursor) }
    }

    pub fn reset(&mut self) {
        unsafe { ptr::write_bytes(self.base, RET_OPCODE, self.length) };
        self.cursor = 0;
    }

    pub fn write_byte(&mut self, byte: u8) -> CalculatorResult<()> {
        if self.cursor >= self.length {
            return Err(CalculatorError::HostcodeFull);
        }
        unsafe { *self.base.add(self.cursor) = byte };
        self.cursor += 1;
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> CalculatorResult<()> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    pub fn push_rbp(&mut self) -> CalculatorResult<()> {
        self.write_byte(0x55)
    }

    pub fn mov_rbp_rsp(&mut self) -> CalculatorResult<()> {
        self.write_bytes(&[0x48, 0x89, 0xe5])
    }

    pub fn sub_rsp_imm08(&mut self, imm8: u8) -> CalculatorResult<()> {
        self.write_bytes(&[0x48, 0x83, 0xec, imm8])
    }

    pub fn mov_rsp_rbp(&mut self) -> CalculatorResult<()> {
        self.write_bytes(&[0x48, 0x89, 0xec])
    }

    pub fn pop_rbp(&mut self) -> CalculatorResult<()> {
        self.write_byte(0x5d)
    }

    pub fn ret(&mut self) -> CalculatorResult<()> {
        self.write_byte(RET_OPCODE)
    }

    pub fn mov_rax_imm64(&mut self, imm64: u64) -> CalculatorResult<()> {
        self.write_byte(0x48)?;
        self.write_byte(0xb8)?;
        self.write_bytes(&imm64.to_le_bytes())
    }

    pub fn mov_rdi_imm64(&mut self, imm64: u64) -> CalculatorResult<()> {
        self.write_byte(0x48)?;
        self.write_byte(0xbf)?;
        self.write_bytes(&imm64.to_le_bytes())
    }

    pub fn mov_rsi_imm64(&mut self, imm64: u64) -> CalculatorResult<()> {
        self.write_byte(0x48)?;
        self.write_byte(0xbe)?;
        self.write_bytes(&imm64.to_le_bytes())
    }

    pub fn call_rax(&mut self) -> CalculatorResult<()> {
        self.write_bytes(&[0xff, 0xd0])
    }
}

impl Drop for HostCodeBuffer {
    fn drop(&mut self) {
        unsafe {
            libc::munmap(self.base as *mut libc::c_void, self.length);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_buffer_is_filled_with_ret() {
        let buffer = HostCodeBuffer::new().unwrap();
        let slice = unsafe { std::slice::from_raw_parts(buffer.begin(), buffer.len()) };
        assert!(slice.iter().all(|&b| b == RET_OPCODE));
    }

    #[test]
    fn test_reset_after_writes_restores_ret_padding() {
        let mut buffer = HostCodeBuffer::new().unwrap();
        buffer.push_rbp().unwrap();
        buffer.reset();
        assert_eq!(buffer.cursor(), 0);
        let slice = unsafe { std::slice::from_raw_parts(buffer.begin(), buffer.len()) };
        assert!(slice.iter().all(|&b| b == RET_OPCODE));
    }

    #[test]
    fn test_mov_rax_imm64_encodes_rex_and_little_endian_immediate() {
        let mut buffer = HostCodeBuffer::new().unwrap();
        buffer.mov_rax_imm64(0x1122_3344_5566_7788).unwrap();
        let slice = unsafe { std::slice::from_raw_parts(buffer.begin(), buffer.cursor()) };
        assert_eq!(slice, &[0x48, 0xb8, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
    }

    #[test]
    fn test_write_byte_fails_past_page_length() {
        let mut buffer = HostCodeBuffer::new().unwrap();
        buffer.cursor = buffer.length;
        assert_eq!(buffer.write_byte(0x90), Err(CalculatorError::HostcodeFull));
    }
}
