//! COF decoding and encoding through the facade crate

use d2cof::prelude::*;

#[test]
fn build_encode_decode() {
	let mut cof = new_composite_document();
	cof.set_dimensions(8, 4);
	cof.set_speed(16);

	let mut torso = CofLayer::new(CompositeType::Torso);
	torso.selectable = true;
	torso.weapon_class = WeaponClass::HandToHand;
	cof.add_layer(torso).unwrap();

	let mut weapon = CofLayer::new(CompositeType::RightHand);
	weapon.draw_effect = DrawEffect::Normal;
	weapon.weapon_class = WeaponClass::OneHandSwing;
	cof.add_layer(weapon).unwrap();

	cof.set_frame_event(2, FrameEvent::Attack).unwrap();

	// Draw the weapon behind the torso when facing away.
	for frame in 0..4 {
		cof.priority_mut().set(4, frame, 0, CompositeType::RightHand).unwrap();
		cof.priority_mut().set(4, frame, 1, CompositeType::Torso).unwrap();
	}

	let bytes = encode_composite(&cof);
	assert_eq!(bytes.len(), 25 + 3 + 2 * 9 + 4 + 8 * 4 * 2);
	assert_eq!(&bytes[..3], &[2, 4, 8]);
	assert_eq!(bytes[24], 16);

	let decoded = decode_composite(&bytes).unwrap();
	assert_eq!(decoded, cof);
	assert_eq!(decoded.priority().frame(4, 3), Some(&[CompositeType::RightHand, CompositeType::Torso][..]));
	assert_eq!(decoded.priority().frame(0, 3), Some(&[CompositeType::Torso, CompositeType::RightHand][..]));
	assert_eq!(encode_composite(&decoded), bytes);
}

#[test]
fn truncated_document_fails() {
	let mut cof = new_composite_document();
	cof.set_dimensions(1, 2);
	cof.add_layer(CofLayer::new(CompositeType::Head)).unwrap();
	let bytes = encode_composite(&cof);

	for len in 0..bytes.len() {
		let err = decode_composite(&bytes[..len]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::TruncatedInput, "length {len}");
	}
	assert!(decode_composite(&bytes).is_ok());
}

#[test]
fn out_of_range_mutations() {
	let mut cof = new_composite_document();
	cof.set_dimensions(2, 2);
	cof.add_layer(CofLayer::new(CompositeType::Legs)).unwrap();

	let err = cof.priority_mut().set(2, 0, 0, CompositeType::Head).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::InvalidArgument);
	assert!(cof.set_frame_event(2, FrameEvent::Sound).is_err());
	assert!(cof.set_layer(1, CofLayer::default()).is_err());
}
