use vecta::{
    assert_approx_eq, math, max, min, vec2, vec3, vec4, Complex, Mat4, Mat4f, Vec3, Vec3f, Vec4,
    Vec4f,
};

#[test]
fn cross_of_unit_axes() {
    assert_eq!(vec3(1.0f32, 0.0, 0.0).cross(vec3(0.0f32, 1.0, 0.0)), vec3(0.0, 0.0, 1.0));
    assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
    assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
}

#[test]
fn complex_times_conjugate() {
    let z = Complex::new(1.0f32, 1.0);
    assert_eq!(z * Complex::new(1.0f32, -1.0), Complex::new(2.0, 0.0));
    assert_eq!(z * z.conjugate(), Complex::new(z.norm_sqr(), 0.0));
}

#[test]
fn translate_point() {
    let p = Mat4f::translate([1.0, 2.0, 3.0]) * vec4(0.0, 0.0, 0.0, 1.0);
    assert_eq!(p, vec4(1.0, 2.0, 3.0, 1.0));
}

#[test]
fn variadic_min_max() {
    assert_eq!(min!(3, 1, 2), 1);
    assert_eq!(max!(3, 1, 2), 3);
    assert_eq!(min!(4.5), 4.5);
    assert_eq!(max!(-1.0, -7.5, 2.25, 0.0), 2.25);
}

#[test]
fn mixed_precision_arithmetic() {
    let d = vec3(0.1f64, 0.2, 0.3);
    let f = vec3(1.0f32, 2.0, 3.0);
    assert_approx_eq!(f + d, vec3(1.1f32, 2.2, 3.3)).abs(1e-6);
    assert_approx_eq!(d + f, vec3(1.1f64, 2.2, 3.3)).abs(1e-12);

    // Narrowing keeps the receiver's element type; float to integer casts saturate.
    let mut bytes = Vec4::<u8>::splat(10);
    bytes += vec4(0.9f64, 1.5, 2.0, -1.0);
    assert_eq!(bytes, vec4(10, 11, 12, 10));

    assert_eq!(Mat4::<i32>::IDENTITY * Vec4f::W, vec4(0, 0, 0, 1));
}

#[test]
fn componentwise_construction() {
    let v = Vec4f::from_components((1u8, 2i64, 3.5f64));
    assert_eq!(v, vec4(1.0, 2.0, 3.5, 0.0));

    let mut w = Vec3::<i16>::splat(9);
    w.set((1.9f32,)).set((-2.0f64, 3u8));
    assert_eq!(w, vec3(-2, 3, 9));

    assert_eq!(vec2(1.9, 2.1).cast::<u16>(), vec2(1, 2));
}

#[test]
fn aliased_components_share_storage() {
    let mut color = vec4(0.0f32, 0.25, 0.5, 1.0);
    color.r = 1.0;
    color.a = 0.5;
    assert_eq!(color.x, 1.0);
    assert_eq!(color.w, 0.5);
    assert_eq!(color, vec4(1.0, 0.25, 0.5, 0.5));

    let mut uv = vec2(0u32, 0);
    uv.s = 3;
    uv.t = 4;
    assert_eq!((uv.x, uv.y), (3, 4));
    assert_eq!(uv.length_squared(), 25);
}

#[test]
fn lerp_yields_floats() {
    let a = vec2(0u8, 10);
    let b = vec2(10i32, 20);
    assert_eq!(math::lerp(a, b, 0.5f32), vec2(5.0f32, 15.0));
    assert_eq!(a.lerp(b, 0.0f64), vec2(0.0f64, 10.0));
    assert_eq!(a.lerp(b, 1.0f64), vec2(10.0f64, 20.0));
}

#[test]
fn camera_pipeline() {
    let model = Mat4f::rotate_y(30.0) * Mat4f::scale_uniform(0.5);
    let view = Mat4f::view([4.0, 3.0, 5.0], Vec3f::ZERO, Vec3f::Y);
    let projection = Mat4f::projection(0.1, 100.0, 60.0, 16.0 / 9.0);
    let mvp = projection * view * model;

    // The origin is what the camera looks at, so it lands in the middle of the screen.
    let clip = mvp * Vec4f::W;
    let ndc = clip.truncate().checked_div(clip.w).unwrap();
    assert_approx_eq!(ndc.x, 0.0).abs(1e-6);
    assert_approx_eq!(ndc.y, 0.0).abs(1e-6);
    assert!(ndc.z > -1.0 && ndc.z < 1.0);

    // All corners of the scaled-down cube are inside the view frustum.
    for corner in [-1.0f32, 1.0]
        .into_iter()
        .flat_map(|x| [vec3(x, -1.0, -1.0), vec3(x, -1.0, 1.0), vec3(x, 1.0, -1.0), vec3(x, 1.0, 1.0)])
    {
        let clip = mvp * corner.extend(1.0);
        let ndc = clip.truncate().checked_div(clip.w).unwrap();
        for c in ndc.into_array() {
            assert!((-1.0..=1.0).contains(&c), "{corner} -> {ndc}");
        }
    }
}

#[test]
fn checked_alternatives() {
    let v = vec3(1.0f64, 2.0, 3.0);
    assert_eq!(v.get(2), Some(&3.0));
    assert_eq!(v.get(3), None);
    assert_eq!(v.checked_div(0.0f32), None);
    assert_eq!(v.checked_div(1e-16f64), None);
    assert_eq!(v.checked_div(2u8), Some(vec3(0.5, 1.0, 1.5)));
    assert_eq!(Vec3f::ZERO.try_normalize(), None);
    assert_eq!(Mat4f::IDENTITY.get(3, 3), Some(&1.0));
    assert_eq!(Mat4f::IDENTITY.get(3, 4), None);
}

#[test]
#[should_panic]
fn vector_index_out_of_range() {
    let v = vec4(1, 2, 3, 4);
    let i = v.as_slice().len();
    let _ = v[i];
}
