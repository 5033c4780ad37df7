#![no_main]
use bytespan::ByteSpan;
use libfuzzer_sys::{
    arbitrary::{Arbitrary, Unstructured},
    fuzz_target,
};

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    // Generate two different fuzzed inputs plus a fuzzed sub-range
    if let (Ok(input1), Ok(input2), Ok(i), Ok(j)) = (
        <Vec<u8> as Arbitrary>::arbitrary(&mut unstructured),
        <Vec<u8> as Arbitrary>::arbitrary(&mut unstructured),
        <usize as Arbitrary>::arbitrary(&mut unstructured),
        <usize as Arbitrary>::arbitrary(&mut unstructured),
    ) {
        let a = ByteSpan::new(&input1);
        let b = ByteSpan::new(&input2);

        assert_eq!(input1 == input2, a == b);
        assert_eq!(input1.cmp(&input2), a.cmp(&b));
        assert_eq!(input1.len(), a.len());
        assert_eq!(input2.len(), b.len());
        assert_eq!(input1.starts_with(&input2), a.starts_with(&b));
        assert_eq!(input1.ends_with(&input2), a.ends_with(&b));

        // Copies must denote the identical range
        let a_c = a;
        assert_eq!(a, a_c);
        assert_eq!(a.as_slice().as_ptr(), a_c.as_slice().as_ptr());

        // Sub-range extraction must agree with direct indexing
        let i = i % (input1.len() + 1);
        let j = j % (input1.len() + 1);
        let (begin, end) = if i <= j { (i, j) } else { (j, i) };

        let sub = a.slice(begin..end);
        assert_eq!(end - begin, sub.len());
        assert_eq!(&input1[begin..end], &*sub);
    }
});
