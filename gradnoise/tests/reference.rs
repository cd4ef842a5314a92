//! Pinned outputs for fixed seeds. A change here means textures and terrain
//! baked against these seeds would change.

use gradnoise::{LatticeSize, NoiseField, NoiseMode};

type Sample = (LatticeSize, f64, [f64; 3], [f64; 5]);

/// (lattice, seed, point, [noise1d, noise2d, noise3d, simplex2d, simplex3d])
#[allow(clippy::excessive_precision)]
const SAMPLES: [Sample; 32] = [
    (
        LatticeSize::Large,
        12345.0,
        [0.5, 1.25, -3.75],
        [
            0.0,
            -0.237060546875,
            -0.0397028923034668,
            -0.4530025910973675,
            -0.3855832818930041,
        ],
    ),
    (
        LatticeSize::Large,
        12345.0,
        [12.3, 45.6, 78.9],
        [
            -0.13691999999999976,
            -0.3517681152000006,
            0.23690119190661185,
            -0.36571315400658494,
            -0.030852405333325006,
        ],
    ),
    (
        LatticeSize::Large,
        12345.0,
        [-101.01, 7.5, 0.001],
        [
            0.009999901494005113,
            0.49998285995599956,
            0.00000246530816423729,
            -0.20308276103075423,
            0.05421206395316322,
        ],
    ),
    (
        LatticeSize::Large,
        12345.0,
        [1234.5678, -987.654, 3.14159],
        [
            0.48297199375334754,
            -0.31121555690081365,
            -0.44272640105162847,
            0.5987785559343555,
            -0.6719727492281352,
        ],
    ),
    (
        LatticeSize::Large,
        0.123456,
        [0.5, 1.25, -3.75],
        [
            -0.25,
            -0.314697265625,
            -0.1991267204284668,
            0.06129109378904519,
            0.020595756172839496,
        ],
    ),
    (
        LatticeSize::Large,
        0.123456,
        [12.3, 45.6, 78.9],
        [
            0.13691999999999976,
            0.06259228799999922,
            0.04639294939883498,
            0.3265026707668669,
            -0.31240409599999597,
        ],
    ),
    (
        LatticeSize::Large,
        0.123456,
        [-101.01, 7.5, 0.001],
        [
            -0.000009752094000247074,
            -0.24499512395299733,
            -0.26049748806653633,
            0.1833668388873942,
            0.1881031962626879,
        ],
    ),
    (
        LatticeSize::Large,
        0.123456,
        [1234.5678, -987.654, 3.14159],
        [
            -0.21259836322387385,
            -0.0020603705884775225,
            -0.3031764296606797,
            -0.04844471915356203,
            -0.08249749788873072,
        ],
    ),
    (
        LatticeSize::Large,
        -7.0,
        [0.5, 1.25, -3.75],
        [
            0.25,
            0.560302734375,
            0.3719449043273926,
            -0.39235277319177336,
            -0.4279723894032922,
        ],
    ),
    (
        LatticeSize::Large,
        -7.0,
        [12.3, 45.6, 78.9],
        [
            0.36523200000000083,
            -0.025435188480002063,
            -0.027483935798169958,
            0.4818573954000005,
            0.5564868906666585,
        ],
    ),
    (
        LatticeSize::Large,
        -7.0,
        [-101.01, 7.5, 0.001],
        [
            -0.000009752094000247074,
            -0.2500024626500001,
            0.499990178760372,
            -0.7613229142347502,
            -0.16739124190187538,
        ],
    ),
    (
        LatticeSize::Large,
        -7.0,
        [1234.5678, -987.654, 3.14159],
        [
            0.0,
            0.18498648876097906,
            0.19061101620396065,
            -0.6675842310972097,
            -0.776478804881942,
        ],
    ),
    (
        LatticeSize::Large,
        4000000000.0,
        [0.5, 1.25, -3.75],
        [
            -0.5,
            -0.314697265625,
            0.23438167572021484,
            0.06012857857030834,
            -0.36554331275720164,
        ],
    ),
    (
        LatticeSize::Large,
        4000000000.0,
        [12.3, 45.6, 78.9],
        [
            -0.36523200000000083,
            0.2143129843200013,
            -0.46198851495966275,
            -0.31043869620752024,
            -0.4127553599999911,
        ],
    ),
    (
        LatticeSize::Large,
        4000000000.0,
        [-101.01, 7.5, 0.001],
        [
            0.0,
            -0.49999014939999975,
            -0.5054950129830726,
            -0.4289379697412996,
            0.05103366679936311,
        ],
    ),
    (
        LatticeSize::Large,
        4000000000.0,
        [1234.5678, -987.654, 3.14159],
        [
            -0.05777526730559987,
            0.5937819780600395,
            -0.05913090424468766,
            0.054617520310310724,
            -0.5657678104485897,
        ],
    ),
    (
        LatticeSize::Small,
        12345.0,
        [0.5, 1.25, -3.75],
        [
            0.0,
            0.409423828125,
            -0.5343451499938965,
            0.45298643889522755,
            0.46839197530864196,
        ],
    ),
    (
        LatticeSize::Small,
        12345.0,
        [12.3, 45.6, 78.9],
        [
            0.13691999999999976,
            0.09157924607999995,
            0.31491941682677504,
            0.47445913718555877,
            -0.014454922666657967,
        ],
    ),
    (
        LatticeSize::Small,
        12345.0,
        [-101.01, 7.5, 0.001],
        [
            0.009999901494005113,
            0.25500724019100274,
            -0.24949019382774415,
            0.06479666238513206,
            -0.18399747684734455,
        ],
    ),
    (
        LatticeSize::Small,
        12345.0,
        [1234.5678, -987.654, 3.14159],
        [
            -0.48297199375334754,
            -0.4323429540120121,
            0.13598439246377647,
            0.5894573173551378,
            0.7699231210745063,
        ],
    ),
    (
        LatticeSize::Small,
        0.123456,
        [0.5, 1.25, -3.75],
        [
            0.25,
            -0.15087890625,
            0.2638239860534668,
            -0.4513822653264224,
            -0.010040149176954716,
        ],
    ),
    (
        LatticeSize::Small,
        0.123456,
        [12.3, 45.6, 78.9],
        [
            -0.13691999999999976,
            0.17549037696000003,
            -0.20473280086794657,
            0.6117338587708122,
            0.34435154133333784,
        ],
    ),
    (
        LatticeSize::Small,
        0.123456,
        [-101.01, 7.5, 0.001],
        [
            -0.000009752094000247074,
            -0.5049974388440025,
            -0.004490164143280739,
            0.23224225689782246,
            0.6169044551361171,
        ],
    ),
    (
        LatticeSize::Small,
        0.123456,
        [1234.5678, -987.654, 3.14159],
        [
            0.2703736305294737,
            0.21281180950186612,
            0.16904387866862336,
            -0.03597638524573284,
            -0.12521531535709168,
        ],
    ),
    (
        LatticeSize::Small,
        -7.0,
        [0.5, 1.25, -3.75],
        [
            0.25,
            0.012939453125,
            0.002223968505859375,
            -0.4513260498919438,
            0.3551326388888889,
        ],
    ),
    (
        LatticeSize::Small,
        -7.0,
        [12.3, 45.6, 78.9],
        [
            -0.36523200000000083,
            -0.03981849215999954,
            -0.3059737721051152,
            0.4583951626262121,
            -0.06472246400000764,
        ],
    ),
    (
        LatticeSize::Small,
        -7.0,
        [-101.01, 7.5, 0.001],
        [
            0.009999901494005113,
            -0.49998778525599974,
            0.2494926195215492,
            0.18493738187648573,
            -0.7886792672157148,
        ],
    ),
    (
        LatticeSize::Small,
        -7.0,
        [1234.5678, -987.654, 3.14159],
        [
            -0.05777526730559987,
            -0.06378567472971164,
            -0.18264188890155914,
            -0.6737578154159284,
            0.40297120108432016,
        ],
    ),
    (
        LatticeSize::Small,
        4000000000.0,
        [0.5, 1.25, -3.75],
        [
            -0.25,
            -0.07763671875,
            -0.13660001754760742,
            -0.3922284633821422,
            -0.8044689429012345,
        ],
    ),
    (
        LatticeSize::Small,
        4000000000.0,
        [12.3, 45.6, 78.9],
        [
            0.36523200000000083,
            0.04505988479999984,
            0.0008348219990102212,
            0.3496491794472383,
            0.3073473919999929,
        ],
    ),
    (
        LatticeSize::Small,
        4000000000.0,
        [-101.01, 7.5, 0.001],
        [
            -0.009990149400004866,
            -0.23999029715899467,
            0.24600492783609032,
            -0.190916806781906,
            0.16526763335590006,
        ],
    ),
    (
        LatticeSize::Small,
        4000000000.0,
        [1234.5678, -987.654, 3.14159],
        [
            0.05777526730559987,
            -0.08954844829595693,
            -0.4499321572789368,
            -0.042149969564451564,
            0.1567603508322425,
        ],
    ),
];

/// Octave sums at (12.3, 45.6, 78.9) with 3 and 6 bands, one row per mode in
/// p1, p2, p3, s2, s3 order.
#[allow(clippy::excessive_precision)]
const OCTAVES: [(LatticeSize, f64, [[f64; 2]; 5]); 8] = [
    (
        LatticeSize::Large,
        12345.0,
        [
            [-0.1133439999999992, -0.09608800000000017],
            [-0.22949844991999951, -0.23241757183999856],
            [0.11428184824873189, 0.06802278053069703],
            [0.25857674848558615, 0.2846666095489672],
            [-0.5239953919999778, -0.4376090973333385],
        ],
    ),
    (
        LatticeSize::Large,
        0.123456,
        [
            [0.1354880000000016, 0.02672800000000171],
            [0.13175787520000004, 0.08624804863999987],
            [0.04330321585110922, 0.11714035625000298],
            [-0.39023251457530517, -0.42154808318274894],
            [-0.3412554133332878, -0.21548437066667142],
        ],
    ),
    (
        LatticeSize::Large,
        -7.0,
        [
            [-0.34912000000000143, -0.22588000000000152],
            [0.13356873728000246, -0.02040379391999864],
            [-0.08819617834597082, -0.08739514838301857],
            [-0.7062883854264341, -0.48014263213592107],
            [-0.21845773866666215, -0.1950092360000037],
        ],
    ),
    (
        LatticeSize::Large,
        4000000000.0,
        [
            [0.23072000000000112, 0.17397600000000044],
            [0.25271861248000194, 0.19278575616000349],
            [-0.011889266596246374, 0.006982602446446599],
            [0.2588095264609639, 0.12170155950461253],
            [0.16247171199998686, -0.0011918159999953493],
        ],
    ),
    (
        LatticeSize::Small,
        12345.0,
        [
            [0.11737600000000192, 0.04823999999999941],
            [-0.17042089984000094, -0.05182584832000363],
            [0.17976636704685303, 0.16858925080986042],
            [-0.21715270870997627, -0.07484220516089132],
            [-0.038960479999991436, -0.17512030800002926],
        ],
    ),
    (
        LatticeSize::Small,
        0.123456,
        [
            [-0.11737600000000192, -0.06756800000000082],
            [-0.447936737280001, -0.3699585638399957],
            [-0.2443168427278375, -0.33788608930446645],
            [-0.3243808503492223, -0.26725190819027966],
            [-0.040709386666653954, -0.05061700933334809],
        ],
    ),
    (
        LatticeSize::Small,
        -7.0,
        [
            [0.16627199999999984, 0.17280799999999819],
            [-0.058089062400000446, -0.16342140928000096],
            [-0.2134673384341382, -0.3234939011014621],
            [-0.15816848757750435, -0.08166495364456332],
            [0.3436395733333392, 0.20023084133326546],
        ],
    ),
    (
        LatticeSize::Small,
        4000000000.0,
        [
            [-0.2317439999999995, -0.22273599999999752],
            [0.20169322495999903, 0.07582792959999915],
            [-0.054536355944837585, -0.0851011573669754],
            [-0.390288267562879, -0.433661852370075],
            [0.15761466666668617, 0.14133882800002068],
        ],
    ),
];

#[test]
fn classic_and_simplex_samples() {
    for (lattice, seed, [x, y, z], expected) in SAMPLES {
        let field = NoiseField::with_seed(lattice, seed);
        let actual = [
            field.noise1d(x),
            field.noise2d(x, y),
            field.noise3d(x, y, z),
            field.simplex2d(x, y),
            field.simplex3d(x, y, z),
        ];
        assert_eq!(actual, expected, "{lattice:?} seed {seed} at ({x}, {y}, {z})");
    }
}

#[test]
fn octave_sums() {
    let (x, y, z) = (12.3, 45.6, 78.9);
    for (lattice, seed, rows) in OCTAVES {
        let field = NoiseField::with_seed(lattice, seed);
        for (mode, [three, six]) in NoiseMode::ALL.into_iter().zip(rows) {
            assert_eq!(
                field.octave(mode, 3, x, y, z),
                Ok(three),
                "{lattice:?} seed {seed} {mode}"
            );
            assert_eq!(
                field.octave(mode, 6, x, y, z),
                Ok(six),
                "{lattice:?} seed {seed} {mode}"
            );
        }
    }
}

#[test]
fn seed_12345_origin() {
    let field = NoiseField::with_seed(LatticeSize::Large, 12345);
    assert_eq!(field.noise2d(0.0, 0.0), 0.0);
    assert_eq!(field.octave(NoiseMode::Classic2d, 1, 0.0, 0.0, 0.0), Ok(0.0));
}

#[test]
fn reseeding_reproduces_pins() {
    let mut field = NoiseField::with_seed(LatticeSize::Small, 1);
    for (lattice, seed, [x, y, z], expected) in SAMPLES {
        if lattice != LatticeSize::Small {
            continue;
        }
        field.reseed(seed);
        assert_eq!(field.noise3d(x, y, z), expected[2]);
        assert_eq!(field.simplex3d(x, y, z), expected[4]);
    }
}
