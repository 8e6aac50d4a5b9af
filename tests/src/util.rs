use common::constants::{FILLER, RESET_VECTOR, RESET_VECTOR_END};

pub fn check_image(image: &[u8], code: &[u8], size: usize) {
    assert_eq!(image.len(), size, "image size");
    assert_eq!(&image[..code.len()], code, "code");
    assert_eq!(&image[RESET_VECTOR..RESET_VECTOR_END], [0x00, 0x80], "reset vector");
    for (i, &b) in image.iter().enumerate() {
        if i >= code.len() && !(RESET_VECTOR..RESET_VECTOR_END).contains(&i) {
            assert_eq!(b, FILLER, "filler at {i:#x}");
        }
    }
}
