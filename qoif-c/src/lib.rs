#![no_std]

use core::alloc::{GlobalAlloc, Layout};

use qoif::decode::slice_api::decode_to_slice;

#[panic_handler]
fn panic_handler(_info: &core::panic::PanicInfo) -> ! {
    unsafe { core::hint::unreachable_unchecked() }
}

/// `decode_to_slice` never allocates; this only exists so the `alloc` crate
/// (pulled in transitively by `qoif`'s `Vec`-based decode path, which this
/// shim never calls) has a global allocator to link against.
struct NeverAlloc;

unsafe impl GlobalAlloc for NeverAlloc {
    unsafe fn alloc(&self, _layout: Layout) -> *mut u8 {
        core::hint::unreachable_unchecked()
    }

    unsafe fn dealloc(&self, _ptr: *mut u8, _layout: Layout) {
        core::hint::unreachable_unchecked()
    }
}

#[global_allocator]
static ALLOCATOR: NeverAlloc = NeverAlloc;

/// Decodes a QOIF image from `input` into `output` as tightly packed RGBA
/// bytes.
///
/// - `input`: pointer to the complete QOIF byte stream (header, body, footer)
/// - `input_len`: length of `input` in bytes
/// - `output`: pointer to the destination buffer
/// - `output_len`: length of `output` in bytes
///
/// Returns the number of pixels written on success, or -1 on any decode
/// error (truncated input, bad magic, unsupported channel count, or an
/// output buffer too small for the header's declared dimensions).
///
/// # Safety
///
/// `input` must point to `input_len` readable bytes and `output` must point
/// to `output_len` writable bytes. Behavior is undefined if either pointer
/// is invalid for its stated length.
#[no_mangle]
pub unsafe extern "C" fn qoif_decode(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
) -> isize {
    let input = unsafe { core::slice::from_raw_parts(input, input_len) };
    let output = unsafe { core::slice::from_raw_parts_mut(output, output_len) };

    match unsafe { decode_to_slice(input, output) } {
        Ok(written) => written as isize,
        Err(_) => -1,
    }
}
