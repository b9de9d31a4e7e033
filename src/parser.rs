use crate::opcode;
use crate::unroll;

/// expects pre-sifted `+,-.<>[]` bytes
pub fn parse(source: &[u8]) -> (Vec<u8>, i32) {
    let (code, _end, depth) = parse_frame(source, 0, 0);
    (code, depth)
}

fn is_plus_or_minus(b: Option<&u8>) -> bool {
    matches!(b, Some(b'+') | Some(b'-'))
}

// one frame per `[`
fn parse_frame(source: &[u8], mut i: usize, mut depth: i32) -> (Vec<u8>, usize, i32) {
    let srclen = source.len();
    let mut out: Vec<u8> = Vec::new();
    let mut shift: i32 = 0;
    let mut total_shift: i64 = 0;
    let mut base_value: i32 = 0;
    let base_i = i;
    let mut poison = false;

    while i < srclen {
        match source[i] {
            b'>' => {
                shift += 1;
                total_shift += 1;
                if shift > 15 {
                    out.push(opcode::SHFT | opcode::encode_shift(15));
                    shift -= 15;
                }
            }

            b'<' => {
                shift -= 1;
                total_shift -= 1;
                if shift < -16 {
                    out.push(opcode::SHFT | opcode::encode_shift(-16));
                    shift += 16;
                }
            }

            b'[' => {
                let is_zero_idiom = is_plus_or_minus(source.get(i + 1))
                    && source.get(i + 2) == Some(&b']');

                if is_zero_idiom {
                    out.push(opcode::ZERO | opcode::encode_shift(shift));
                    shift = 0;
                    i += 2;
                    if total_shift == 0 {
                        poison = true;
                    }
                } else {
                    let (subprog, next_i, next_depth) = parse_frame(source, i + 1, depth + 1);
                    i = next_i;
                    depth = next_depth;

                    out.push(opcode::JRZ | opcode::encode_shift(shift));
                    out.extend(opcode::encode_varint(subprog.len()));
                    out.extend(subprog);

                    shift = 0;
                    poison = true;
                }
            }

            b']' => {
                if total_shift == 0 && !poison && (base_value & 1) == 1 {
                    let mul = opcode::MOD_INV[(base_value & 0xFF) as usize];
                    let subprog = unroll::unroll(source, base_i, mul);
                    return (subprog, i, depth - 1);
                }

                let body_len = out.len();
                out.push(opcode::JRNZ | opcode::encode_shift(shift));
                out.extend(opcode::encode_varint(body_len));
                return (out, i, depth - 1);
            }

            b'.' => {
                out.push(opcode::PUTC | opcode::encode_shift(shift));
                shift = 0;
                poison = true;
            }

            b',' => {
                out.push(opcode::GETC | opcode::encode_shift(shift));
                shift = 0;
                poison = true;
            }

            c @ (b'+' | b'-') => {
                let mut value: i32 = 44 - c as i32;
                while is_plus_or_minus(source.get(i + 1)) {
                    i += 1;
                    value += 44 - source[i] as i32;
                }

                if total_shift == 0 {
                    base_value += value;
                }

                out.push(opcode::ADD | opcode::encode_shift(shift));
                out.push((value & 0xFF) as u8);
                shift = 0;
            }

            other => unreachable!("unsifted byte {other:#04x} reached the parser"),
        }

        i += 1;
    }

    (out, i, depth)
}
