/// Check whether `bytes` starts like an MP3 file: either an ID3v2 tag or an
/// MPEG audio frame header (11 sync bits, a valid version, layer and bitrate).
pub fn looks_like_mp3(bytes: &[u8]) -> bool {
    if bytes.starts_with(b"ID3") {
        return true;
    }
    is_mpeg_frame_header(bytes)
}

/// Validate the first four bytes as an MPEG audio frame header
pub fn is_mpeg_frame_header(bytes: &[u8]) -> bool {
    if bytes.len() < 4 {
        return false;
    }

    let sync = bytes[0] == 0xFF && (bytes[1] & 0xE0) == 0xE0;
    let version = (bytes[1] >> 3) & 0b11;
    let layer = (bytes[1] >> 1) & 0b11;
    let bitrate = (bytes[2] >> 4) & 0b1111;
    let sample_rate = (bytes[2] >> 2) & 0b11;

    // 0b01 is a reserved version, layer 0b00 and sample rate 0b11 are reserved,
    // bitrate 0b1111 is invalid
    sync && version != 0b01 && layer != 0b00 && bitrate != 0b1111 && sample_rate != 0b11
}
