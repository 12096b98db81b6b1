/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the polygon macro. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a polygon with the vertexes given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use swept_collide::polygon;
/// # use swept_collide::core::math::Vector2;
/// let triangle = polygon![(-3.0, -3.0), (2.0, 0.0), (1.0, 4.0)];
/// assert_eq!(triangle.vertex_count(), 3);
/// assert_eq!(triangle[0], Vector2::new(-3.0, -3.0));
/// assert_eq!(triangle[2], Vector2::new(1.0, 4.0));
/// ```
#[macro_export]
macro_rules! polygon {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut vertexes = Vec::with_capacity(size);
            $(
                vertexes.push($crate::core::math::Vector2::new($x.0, $x.1));
            )*
            $crate::shapes::Polygon::new(vertexes)
        }
    };
}
