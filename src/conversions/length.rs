use crate::buffer::AudioMatrix;

/// Truncates or pads `audio` to exactly `target_len` rows.
///
/// Padding repeats the last row. An empty matrix has no last row and is padded
/// with silence instead.
pub fn fix_length(mut audio: AudioMatrix, target_len: usize) -> AudioMatrix {
    let len = audio.len();
    if len > target_len {
        audio.truncate(target_len);
    } else if len < target_len {
        let fill = if len == 0 {
            vec![0.0; audio.channels() as usize]
        } else {
            audio.row(len - 1).to_vec()
        };
        audio.extend_with_row(&fill, target_len - len);
    }
    audio
}
