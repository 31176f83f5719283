//! The power-of-ten scaling table.
//!
//! `POW10[i]` is a compensated pair for `10^(308 - i)`, from `10^308` down
//! to `10^-291`. Both components are truncated toward zero: `val` is the
//! largest double not exceeding the power, `err` the largest double not
//! exceeding the remainder. Truncation matters: with nearest-rounded
//! entries, about half the pairs sit above the true power, and the digit
//! loop then emits rounding-interval midpoints that parse away from the
//! input. It also leaves this table's tenth `(0.09999999999999999, ...)`
//! distinct from the nearest-rounded `hp::TENTH` pair.
//!
//! The table stops at `10^-291` because below that the remainder is
//! subnormal and the pair collapses to ordinary double precision; the index
//! clamp routes the trimmed range to the end entries and renormalization
//! makes up the difference a decade at a time.

/*
# the following Python code generates this table:
import struct
from fractions import Fraction
def down(v):
    b = struct.unpack('<Q', struct.pack('<d', v))[0]
    return struct.unpack('<d', struct.pack('<Q', b - 1))[0]
def floor_double(x):
    v = float(x)
    return down(v) if Fraction(v) > x else v
def lit(v):
    return repr(v).replace('e+', 'e')
for i in range(600):
    exact = Fraction(10) ** (308 - i)
    val = floor_double(exact)
    rem = exact - Fraction(val)
    err = floor_double(rem) if rem else 0.0
    print('    (%s, %s),' % (lit(val), lit(err)))
*/
pub static POW10: [(f64, f64); 600] = [
    // (val, err)
    (9.999999999999998e307, 1.886049673240315e292),
    (1e307, 1.396894023974354e290),
    (9.999999999999999e305, 1.3870895958566352e290),
    (1e305, 6.074644749446353e288),
    (1e304, 6.0746447494463536e287),
    (9.999999999999998e302, 1.5210876635133852e287),
    (9.999999999999999e301, 1.1404113349430728e286),
    (9.999999999999999e300, 6.645659242301822e284),
    (9.999999999999999e299, 9.619693059257387e283),
    (9.999999999999999e298, 1.3337235330451846e283),
    (1e298, 4.0433796524657016e281),
    (9.999999999999999e296, 1.2756369350577712e281),
    (1e296, 1.8651322279376994e279),
    (1e295, 1.8651322279376993e278),
    (9.999999999999999e293, 7.537651562646038e277),
    (1e293, 7.537651562646039e276),
    (9.999999999999998e291, 2.083261875336871e276),
    (1e291, 4.213909764965371e274),
    (9.999999999999999e289, 1.1138371843466761e274),
    (9.999999999999998e288, 1.546616064253013e273),
    (9.999999999999999e287, 1.2761292643115525e272),
    (9.999999999999999e286, 9.380207643847267e270),
    (9.999999999999998e285, 1.7832920142017913e270),
    (1e285, 1.9840842079479554e268),
    (9.999999999999999e283, 8.58776584714377e267),
    (1e283, 4.460464822646386e266),
    (9.999999999999999e281, 9.619591103268116e265),
    (9.999999999999999e280, 1.2844045028656698e265),
    (9.999999999999998e279, 1.6874612435392425e264),
    (9.999999999999999e278, 6.798193918553107e262),
    (1e278, 3.649313132040821e261),
    (9.999999999999998e276, 1.9393717064602256e261),
    (9.999999999999999e275, 7.093401492288634e259),
    (1e275, 4.0183225992102296e258),
    (1e274, 7.862171215558236e257),
    (1e273, 5.459765830340732e256),
    (9.999999999999999e271, 8.462772561862612e255),
    (1e271, 4.709014147460262e254),
    (9.999999999999999e269, 7.05511315646173e253),
    (9.999999999999999e268, 9.987736917713566e252),
    (1e268, 2.656177514583977e251),
    (1e267, 2.6561775145839772e250),
    (9.999999999999999e265, 1.1247848690126465e250),
    (9.999999999999999e264, 1.1247848690126465e249),
    (9.999999999999999e263, 6.773019952864752e247),
    (9.999999999999999e262, 1.2366555874441893e247),
    (9.999999999999998e261, 1.5862515825427605e246),
    (1e261, 7.122615947963324e244),
    (9.999999999999999e259, 7.122615947963324e243),
    (1e259, 7.122615947963324e242),
    (9.999999999999998e257, 1.5657674422049537e242),
    (9.999999999999999e256, 1.0323262875745653e241),
    (9.999999999999999e255, 1.365727009218558e240),
    (1e255, 1.1547430305358546e238),
    (1e254, 6.364129306223241e237),
    (1e253, 6.36412930622324e236),
    (9.999999999999999e251, 1.043396233410401e236),
    (9.999999999999999e250, 7.890316691678529e234),
    (1e250, 7.890316691678529e233),
    (1e249, 7.89031669167853e232),
    (9.999999999999999e247, 7.890316691678529e231),
    (1e247, 4.785280507077111e230),
    (9.999999999999999e245, 1.2547870968580655e230),
    (9.999999999999999e244, 7.69625193014094e228),
    (9.999999999999999e243, 7.69625193014094e227),
    (9.999999999999999e242, 1.1486579303921968e227),
    (9.999999999999999e241, 6.748670086695684e225),
    (9.999999999999999e240, 9.709863347462112e224),
    (9.999999999999998e239, 1.711284649937818e224),
    (1e239, 9.188208545617792e221),
    (9.999999999999999e237, 9.594191735713422e221),
    (1e237, 5.979453868566905e220),
    (9.999999999999999e235, 5.979453868566904e219),
    (9.999999999999999e234, 8.803467827275122e218),
    (9.999999999999998e233, 1.5863502724045666e218),
    (1e233, 2.6259372926008967e216),
    (9.999999999999999e231, 8.141589555702883e215),
    (9.999999999999999e230, 1.1588872220141625e215),
    (9.999999999999999e229, 1.1588872220141626e214),
    (1e229, 8.161138937705572e211),
    (1e228, 7.549087847752475e211),
    (9.999999999999999e226, 1.1757196568991174e211),
    (1e226, 3.866992716668614e209),
    (1e225, 7.154577655136347e208),
    (1e224, 3.04509648205168e207),
    (9.999999999999999e222, 8.181947948407513e206),
    (9.999999999999999e221, 1.1392480114879909e206),
    (9.999999999999998e220, 1.5405645322970405e205),
    (1e220, 3.5627579263104886e202),
    (1e219, 3.4915611114517477e202),
    (9.999999999999999e217, 1.1329774408503496e202),
    (1e217, 3.981449442517482e200),
    (9.999999999999999e215, 1.3166855649999999e200),
    (1e215, 9.33960306354895e198),
    (1e214, 4.555537330485139e197),
    (1e213, 1.5654962473202576e196),
    (1e212, 9.040598955232462e195),
    (1e211, 4.368659762787334e194),
    (1e210, 7.288621758065539e193),
    (9.999999999999999e208, 1.0938574252163295e193),
    (1e208, 1.813693016918905e191),
    (9.999999999999999e206, 1.036826917496052e191),
    (9.999999999999999e205, 1.3932675907477861e190),
    (9.999999999999999e204, 9.477167491831186e188),
    (1e204, 1.1230892124936704e187),
    (1e203, 1.1230892124936704e186),
    (1e202, 9.825254086803582e185),
    (9.999999999999999e200, 9.825254086803581e184),
    (1e200, 3.0266877787489637e183),
    (9.999999999999999e198, 1.1524895663817237e183),
    (9.999999999999999e197, 1.1524895663817237e182),
    (1e197, 4.885670753607648e180),
    (1e196, 4.8856707536076484e179),
    (1e195, 2.292223523057028e178),
    (1e194, 5.534032561245304e177),
    (9.999999999999999e192, 1.3638555156715993e177),
    (9.999999999999999e191, 8.573228534546811e175),
    (9.999999999999999e190, 8.573228534546812e174),
    (9.999999999999999e189, 1.2530514958116485e174),
    (9.999999999999999e188, 1.0057210943385439e173),
    (9.999999999999999e187, 1.3148840961799246e172),
    (1e187, 9.284303438781987e170),
    (1e186, 2.0382955831246284e169),
    (1e185, 2.038295583124628e168),
    (9.999999999999998e183, 1.7134145282410792e168),
    (1e183, 5.3405127048434766e166),
    (9.999999999999999e181, 8.288920849235306e165),
    (1e181, 8.288920849235306e164),
    (9.999999999999999e179, 1.0592364712041422e164),
    (1e179, 1.9544502265184856e162),
    (9.999999999999999e177, 1.2751843333422155e162),
    (9.999999999999999e176, 1.0502386436150559e161),
    (9.999999999999999e175, 1.3314207557740056e160),
    (1e175, 6.284654753766312e158),
    (9.999999999999998e173, 1.5071595758733493e158),
    (9.999999999999999e172, 1.2325676694681249e157),
    (9.999999999999999e171, 8.893277864615943e155),
    (1e171, 4.6027793270343126e154),
    (9.999999999999999e169, 9.965902499011351e153),
    (1e169, 6.613950516525702e152),
    (1e168, 6.613950516525701e151),
    (9.999999999999999e166, 9.232663002842616e150),
    (1e166, 5.959272394946474e149),
    (1e165, 1.0051010654816651e149),
    (9.999999999999999e163, 1.2608347067235511e148),
    (1e163, 6.21500603618836e146),
    (1e162, 6.21500603618836e145),
    (9.999999999999999e160, 8.712404876441153e144),
    (9.999999999999999e159, 1.4955901977073138e144),
    (1e159, 7.151530601283158e142),
    (1e158, 4.712664546348789e141),
    (1e157, 1.6640819776808276e140),
    (1e156, 1.6640819776808277e139),
    (9.999999999999999e154, 1.1190902504768206e139),
    (9.999999999999999e153, 1.1190902504768206e138),
    (1e153, 2.6659699587684622e134),
    (9.999999999999999e151, 7.004311452825511e135),
    (9.999999999999999e150, 1.2819021247190365e135),
    (1e150, 1.9164403827562624e133),
    (9.999999999999999e148, 6.459182409603805e132),
    (9.999999999999999e147, 9.298396176383519e131),
    (1e147, 2.2003617594342337e130),
    (1e146, 6.636633270027537e129),
    (1e145, 1.091293881785908e128),
    (9.999999999999999e143, 1.4954642352389981e128),
    (9.999999999999998e142, 1.9286938749453754e127),
    (9.999999999999999e141, 8.456197756794322e125),
    (9.999999999999998e140, 1.5225410877206467e125),
    (9.999999999999998e139, 1.5225410877206468e124),
    (9.999999999999999e138, 9.936963126884478e122),
    (9.999999999999999e137, 1.3242242970835721e122),
    (9.999999999999998e136, 1.7373842775774775e121),
    (9.999999999999999e135, 7.04484326342714e119),
    (1e135, 3.8170309158185056e118),
    (1e134, 7.8517963503293e117),
    (9.999999999999999e132, 1.0373524746898546e117),
    (1e132, 9.170432597638723e114),
    (1e131, 8.797444499042768e114),
    (9.999999999999999e129, 6.334819111768112e113),
    (1e129, 1.7825564358147585e111),
    (9.999999999999999e127, 1.172181214643142e112),
    (1e127, 4.507089332150205e110),
    (1e126, 7.513223838100712e109),
    (1e125, 7.513223838100711e108),
    (1e124, 5.1646812553268785e107),
    (1e123, 2.2290030268595867e106),
    (9.999999999999998e121, 1.6907394169196043e106),
    (9.999999999999999e120, 7.733399705235758e104),
    (1e120, 1.9996531652605798e103),
    (1e119, 5.583244752745066e102),
    (1e118, 3.343500010567262e101),
    (9.999999999999999e116, 8.942861866011773e100),
    (9.999999999999998e115, 1.594206418531741e100),
    (9.999999999999998e114, 2.0316565634883434e99),
    (9.999999999999999e113, 1.211437541694714e98),
    (9.999999999999998e112, 1.5531954674420596e97),
    (1e112, 6.988006530736956e95),
    (1e111, 4.318022735835818e94),
    (9.999999999999999e109, 1.4330461966715084e94),
    (1e109, 1.8149129281160016e92),
    (9.999999999999999e107, 9.637131077240428e91),
    (1e107, 3.118615952970073e90),
    (9.999999999999999e105, 1.1266759858308017e90),
    (1e105, 6.1741699174718016e88),
    (9.999999999999998e103, 1.5722776056539704e88),
    (9.999999999999998e102, 1.9701361947817997e87),
    (1e102, 2.2950486734754662e85),
    (1e101, 2.295048673475466e84),
    (9.999999999999998e99, 1.7836399811281298e84),
    (1e99, 3.2663831195883305e82),
    (1e98, 2.3096297548562918e80),
    (9.999999999999999e96, 1.1613788515870759e81),
    (9.999999999999999e95, 6.870944540710288e79),
    (9.999999999999999e94, 1.2799499509660877e79),
    (9.999999999999998e93, 1.6504846365254996e78),
    (9.999999999999999e92, 7.2414792262697e76),
    (9.999999999999999e91, 1.0136281457202605e76),
    (9.999999999999999e90, 1.0136281457202604e75),
    (1e90, 3.35158872845361e73),
    (1e89, 5.24633424808195e71),
    (1e88, 4.0583275543649637e71),
    (1e87, 4.058327554364963e70),
    (9.999999999999999e85, 1.234042317051364e70),
    (9.999999999999998e84, 1.5791296343908921e69),
    (9.999999999999998e83, 1.579129634390892e68),
    (9.999999999999999e82, 1.0399307010478794e67),
    (1e82, 3.659320343691134e65),
    (1e81, 7.871812010433421e64),
    (9.999999999999999e79, 1.313742659386128e64),
    (1e79, 3.2643992499340446e62),
    (9.999999999999998e77, 1.9719444823146103e62),
    (1e77, 1.721738727445414e60),
    (9.999999999999999e75, 1.1363366992999355e60),
    (1e75, 7.346021882351879e58),
    (1e74, 4.8351811881972075e57),
    (1e73, 1.6966303205038673e56),
    (1e72, 5.619818905120542e55),
    (9.999999999999999e70, 8.071811770505965e54),
    (9.999999999999999e69, 8.071811770505965e53),
    (9.999999999999999e68, 1.1903050622670685e53),
    (1e68, 4.719477774861833e51),
    (1e67, 1.7263224216081438e50),
    (1e66, 5.467766613175255e49),
    (1e65, 7.90961373716366e47),
    (9.999999999999999e63, 1.2482974472363588e48),
    (9.999999999999999e62, 1.248297447236359e47),
    (9.999999999999999e61, 7.915781855704517e45),
    (1e61, 5.0612864702925975e44),
    (1e60, 5.061286470292597e43),
    (1e59, 2.8312119504395354e42),
    (1e58, 5.618805100255863e41),
    (9.999999999999999e56, 1.2587787974796682e41),
    (9.999999999999999e55, 1.2587787974796683e40),
    (9.999999999999999e54, 1.2587787974796683e39),
    (9.999999999999999e53, 9.184964305587298e37),
    (1e53, 6.779051325638371e35),
    (1e52, 6.779051325638371e34),
    (1e51, 6.779051325638372e33),
    (9.999999999999999e49, 1.3139417593047422e34),
    (1e49, 5.350972305245182e32),
    (9.999999999999999e47, 1.1841343378413717e32),
    (9.999999999999998e46, 1.5897825299144049e31),
    (1e46, 6.860180964052979e28),
    (1e45, 7.024271097546445e28),
    (9.999999999999999e43, 1.0985679223259662e28),
    (9.999999999999999e42, 1.0985679223259662e27),
    (9.999999999999999e41, 1.0985679223259662e26),
    (9.999999999999998e40, 1.8722804468793288e25),
    (9.999999999999999e39, 9.051397911876255e23),
    (1e39, 6.029083362839682e22),
    (1e38, 2.251190176543966e21),
    (1e37, 4.6123734179787886e20),
    (9.999999999999999e35, 1.0515331521565845e20),
    (1e35, 3.1366338920820244e18),
    (1e34, 5.4424769012957184e17),
    (1e33, 5.442476901295718e16),
    (9.999999999999999e31, 1.2648236305088512e16),
    (1e31, 364103705034752.0),
    (9.999999999999999e29, 120852863516672.0),
    (1e29, 8566849142784.0),
    (1e28, 416880263168.0),
    (9.999999999999999e26, 124151398400.0),
    (9.999999999999999e25, 12415139840.0),
    (9.999999999999999e24, 1241513984.0),
    (1e24, 16777216.0),
    (1e23, 8388608.0),
    (1e22, 0.0),
    (1e21, 0.0),
    (1e20, 0.0),
    (1e19, 0.0),
    (1e18, 0.0),
    (1e17, 0.0),
    (1e16, 0.0),
    (1000000000000000.0, 0.0),
    (100000000000000.0, 0.0),
    (10000000000000.0, 0.0),
    (1000000000000.0, 0.0),
    (100000000000.0, 0.0),
    (10000000000.0, 0.0),
    (1000000000.0, 0.0),
    (100000000.0, 0.0),
    (10000000.0, 0.0),
    (1000000.0, 0.0),
    (100000.0, 0.0),
    (10000.0, 0.0),
    (1000.0, 0.0),
    (100.0, 0.0),
    (10.0, 0.0),
    (1.0, 0.0),
    (0.09999999999999999, 8.326672684688674e-18),
    (0.009999999999999998, 1.52655665885959e-18),
    (0.0009999999999999998, 1.9602375278537918e-19),
    (9.999999999999999e-05, 8.760353553682875e-21),
    (9.999999999999999e-06, 8.760353553682874e-22),
    (1e-06, 4.525188817411374e-23),
    (1e-07, 4.525188817411374e-24),
    (9.999999999999999e-09, 1.4451356168047705e-24),
    (9.999999999999999e-10, 1.4451356168047705e-25),
    (9.999999999999999e-11, 9.281477339591283e-27),
    (1e-11, 6.050303071806018e-28),
    (1e-12, 2.0113352370744382e-29),
    (9.999999999999999e-14, 9.584399927196151e-30),
    (1e-14, 1.1806906454401013e-32),
    (9.999999999999999e-16, 1.1950982642859185e-31),
    (1e-16, 2.0902213275965394e-33),
    (9.999999999999999e-18, 8.253197149635694e-34),
    (9.999999999999999e-19, 1.2105057038410166e-34),
    (1e-19, 2.4754073164739866e-36),
    (1e-20, 5.484672854579042e-37),
    (1e-21, 9.246254777210363e-38),
    (9.999999999999999e-23, 6.895266075565787e-39),
    (1e-23, 3.9565301985100685e-40),
    (1e-24, 7.629950044829717e-41),
    (9.999999999999999e-26, 7.629950044829716e-42),
    (9.999999999999999e-27, 1.0499809299766942e-42),
    (9.999999999999999e-28, 1.4087133368438474e-43),
    (1e-28, 2.876745653839938e-45),
    (1e-29, 5.679342582489572e-46),
    (9.999999999999999e-31, 9.182588743301614e-47),
    (9.999999999999999e-32, 1.3561646444316666e-47),
    (9.999999999999999e-33, 8.087824318047851e-49),
    (9.999999999999999e-34, 1.1508963146965862e-49),
    (1e-34, 7.232539610818348e-51),
    (9.999999999999999e-36, 1.257806903100274e-51),
    (1e-36, 5.896157255772251e-53),
    (9.999999999999999e-38, 1.4248546974810362e-53),
    (1e-38, 3.808059826012723e-55),
    (1e-39, 7.070712060011985e-56),
    (1e-40, 7.070712060011984e-57),
    (9.999999999999999e-42, 1.2168606175635832e-57),
    (9.999999999999999e-43, 1.2168606175635832e-58),
    (9.999999999999999e-44, 1.2168606175635831e-59),
    (1e-44, 4.700987842202462e-61),
    (1e-45, 1.5894802032718917e-62),
    (9.999999999999998e-47, 1.7147018397924746e-62),
    (1e-47, 2.5618263404376953e-64),
    (1e-48, 2.561826340437695e-65),
    (1e-49, 6.360053438741615e-66),
    (9.999999999999999e-51, 1.1107837311621513e-66),
    (9.999999999999999e-52, 1.407520223217145e-67),
    (9.999999999999998e-53, 1.778440838285887e-68),
    (9.999999999999999e-54, 8.511393006140318e-70),
    (9.999999999999999e-55, 1.1409210311364866e-70),
    (1e-55, 5.4239541677281225e-73),
    (9.999999999999999e-57, 7.334154725892846e-73),
    (1e-57, 4.504255013759499e-74),
    (9.999999999999998e-59, 1.5116378934259552e-74),
    (9.999999999999998e-60, 1.9538097234467907e-75),
    (1e-60, 2.9566536086865743e-77),
    (9.999999999999999e-62, 1.3320055874799908e-77),
    (9.999999999999998e-63, 1.763814015234713e-78),
    (9.999999999999999e-64, 6.842929458479074e-80),
    (1e-64, 3.469426116645307e-81),
    (1e-65, 7.686305293937516e-82),
    (1e-66, 2.4152063223222546e-83),
    (1e-67, 5.709643179581793e-84),
    (9.999999999999999e-69, 1.3945735322730639e-84),
    (1e-69, 3.650620143794581e-86),
    (1e-70, 4.3339665037706365e-88),
    (1e-71, 8.476455383920858e-88),
    (1e-72, 3.4495436754559866e-89),
    (1e-73, 3.0772385766544184e-91),
    (1e-74, 4.2349986299036226e-91),
    (1e-75, 4.234998629903623e-92),
    (1e-76, 7.3031820457147015e-93),
    (1e-77, 7.303182045714702e-94),
    (1e-78, 1.1212716490748558e-96),
    (1e-79, 1.1212716490748557e-97),
    (1e-80, 3.857468248661244e-97),
    (1e-81, 3.8574682486612436e-98),
    (1e-82, 3.857468248661244e-99),
    (9.999999999999999e-84, 1.4830147204971083e-99),
    (9.999999999999999e-85, 7.972222857277434e-101),
    (1e-85, 2.2572859008660592e-102),
    (9.999999999999999e-87, 9.400957096380276e-103),
    (9.999999999999999e-88, 9.400957096380278e-104),
    (1e-88, 6.610460535632536e-105),
    (9.999999999999999e-90, 1.358670193750189e-105),
    (1e-90, 5.062493089968514e-108),
    (9.999999999999999e-92, 1.1406626499417717e-107),
    (1e-92, 1.1875228833981554e-109),
    (1e-93, 9.703442563414456e-110),
    (1e-94, 4.380992763404268e-111),
    (1e-95, 1.0544616383979006e-112),
    (1e-96, 9.37078945091382e-113),
    (9.999999999999999e-98, 9.37078945091382e-114),
    (1e-98, 6.122223899149789e-115),
    (9.999999999999998e-100, 1.8304344718264905e-115),
    (9.999999999999999e-101, 1.0690519206317956e-116),
    (9.999999999999999e-102, 1.0690519206317957e-117),
    (1e-102, 6.724985085512255e-119),
    (1e-103, 4.2465262600086915e-120),
    (1e-104, 7.344599791888146e-121),
    (1e-105, 3.4720078770388284e-122),
    (1e-106, 5.892377823819652e-123),
    (9.999999999999999e-108, 1.4968765124247742e-123),
    (9.999999999999999e-109, 1.4968765124247742e-124),
    (1e-109, 7.869099673288518e-127),
    (9.999999999999999e-111, 9.650569440403157e-127),
    (9.999999999999999e-112, 9.650569440403158e-128),
    (1e-112, 5.03408013151029e-129),
    (1e-113, 2.148774313452248e-130),
    (9.999999999999999e-115, 1.2968671131169906e-130),
    (9.999999999999999e-116, 6.20623562009637e-132),
    (1e-116, 5.70872694201756e-134),
    (9.999999999999999e-118, 1.465928000893829e-133),
    (1e-118, 1.4513981513727892e-135),
    (9.999999999999999e-120, 1.2457966366010706e-135),
    (1e-120, 2.1393086647876592e-137),
    (1e-121, 2.1393086647876593e-138),
    (9.999999999999999e-123, 7.51360955084133e-139),
    (9.999999999999999e-124, 1.0872547604624874e-139),
    (1e-124, 6.673875037395444e-141),
    (9.999999999999999e-126, 1.1922215746432231e-141),
    (1e-126, 5.361789860136247e-143),
    (9.999999999999998e-128, 1.7662588396941217e-143),
    (9.999999999999999e-129, 7.411922949603742e-145),
    (1e-129, 7.411922949603742e-146),
    (9.999999999999999e-131, 1.1416089139969943e-146),
    (1e-131, 1.4056736640544397e-148),
    (1e-132, 1.4056736640544397e-149),
    (9.999999999999999e-134, 1.313662929989292e-149),
    (9.999999999999999e-135, 8.248731118293554e-151),
    (9.999999999999999e-136, 1.1303667481793158e-151),
    (9.999999999999998e-137, 1.894100839054217e-152),
    (1e-137, 2.2343251526537074e-154),
    (9.999999999999999e-139, 8.200997737613872e-155),
    (9.999999999999998e-140, 1.5659338468814078e-155),
    (1e-140, 1.6749495978136918e-157),
    (9.999999999999999e-142, 1.0415192642188933e-157),
    (9.999999999999999e-143, 1.4056960577345284e-158),
    (1e-143, 4.952540739454408e-160),
    (1e-144, 4.952540739454408e-161),
    (1e-145, 8.508954738630531e-162),
    (9.999999999999999e-147, 8.508954738630531e-163),
    (1e-147, 2.952057864917838e-164),
    (1e-148, 6.425118410988272e-165),
    (1e-149, 2.0837927284002296e-166),
    (9.999999999999999e-151, 1.2937106934870334e-166),
    (1e-151, 6.1537855558265185e-168),
    (9.999999999999999e-153, 1.4632937279631287e-168),
    (9.999999999999999e-154, 9.333467452253306e-170),
    (1e-154, 2.7091301680308315e-171),
    (9.999999999999998e-156, 1.9269973378587021e-171),
    (9.999999999999999e-157, 8.919446371989403e-173),
    (1e-157, 5.684906682427647e-174),
    (9.999999999999999e-159, 1.3771255906332035e-174),
    (1e-159, 1.1363352439814277e-176),
    (1e-160, 1.1363352439814277e-177),
    (9.999999999999998e-162, 1.6929986071919687e-177),
    (1e-162, 4.591196362592922e-179),
    (1e-163, 7.675893789924614e-180),
    (1e-164, 3.820022005759999e-181),
    (9.999999999999999e-166, 1.1049781601068651e-181),
    (9.999999999999999e-167, 1.104978160106865e-182),
    (9.999999999999998e-168, 1.8580781179515163e-183),
    (9.999999999999999e-169, 6.813594338192488e-185),
    (9.999999999999999e-170, 1.2697187758853826e-185),
    (1e-170, 1.6654500951138174e-187),
    (1e-171, 1.6654500951138172e-188),
    (9.999999999999999e-173, 1.0283995144910698e-188),
    (9.999999999999999e-174, 1.3875055582326066e-189),
    (1e-174, 4.085789420184388e-192),
    (1e-175, 4.085789420184388e-193),
    (1e-176, 4.085789420184388e-194),
    (1e-177, 4.792197640035245e-194),
    (1e-178, 4.792197640035245e-195),
    (9.999999999999998e-180, 1.5066303963512134e-195),
    (9.999999999999998e-181, 1.9347181598294171e-196),
    (9.999999999999999e-182, 8.644987511339077e-198),
    (9.999999999999999e-183, 1.1989423163512544e-198),
    (9.999999999999998e-184, 2.0350512293946211e-199),
    (9.999999999999999e-185, 7.286310527643607e-201),
    (1e-185, 7.542096444923057e-203),
    (1e-186, 8.919335748431432e-203),
    (9.999999999999999e-188, 1.147093765591241e-203),
    (1e-188, 5.091932887209967e-205),
    (9.999999999999999e-190, 1.306568884808802e-205),
    (9.999999999999999e-191, 1.0573890110313629e-206),
    (9.999999999999999e-192, 1.3688638532531618e-207),
    (9.999999999999999e-193, 9.79520300475913e-209),
    (9.999999999999999e-194, 7.361805799901326e-210),
    (9.999999999999999e-195, 1.3445298812045838e-210),
    (9.999999999999999e-196, 9.643115679455517e-212),
    (9.999999999999999e-197, 7.266751221586569e-213),
    (1e-197, 1.3258400769141948e-214),
    (1e-198, 8.751979007754662e-215),
    (1e-199, 1.789973760091724e-216),
    (1e-200, 1.7899737600917239e-217),
    (1e-201, 5.416018159916171e-218),
    (9.999999999999999e-203, 7.682295909806451e-219),
    (9.999999999999999e-204, 1.05151430971693e-219),
    (9.999999999999998e-205, 1.7597261065576423e-220),
    (9.999999999999998e-206, 2.2023584795830875e-221),
    (9.999999999999999e-207, 1.0957775470194745e-222),
    (1e-207, 7.499710055933454e-224),
    (9.999999999999999e-209, 1.1822291823760066e-224),
    (9.999999999999999e-210, 9.120678218868434e-226),
    (9.999999999999999e-211, 1.2497695224982977e-226),
    (9.999999999999999e-212, 1.2497695224982977e-227),
    (1e-212, 4.582811616902019e-229),
    (1e-213, 4.582811616902019e-230),
    (1e-214, 8.705146829444184e-231),
    (9.999999999999999e-216, 8.705146829444184e-232),
    (9.999999999999999e-217, 1.192572121424275e-232),
    (9.999999999999999e-218, 1.192572121424275e-233),
    (9.999999999999999e-219, 9.409647476118871e-235),
    (9.999999999999999e-220, 1.255473964877372e-235),
    (1e-220, 7.606440013180327e-238),
    (9.999999999999999e-222, 1.0589057040864439e-237),
    (9.999999999999999e-223, 1.058905704086444e-238),
    (1e-223, 2.910609353718809e-240),
    (9.999999999999999e-225, 1.0109154060417837e-240),
    (1e-225, 4.110366804835314e-242),
    (1e-226, 7.859608839574391e-243),
    (1e-227, 5.516332567862468e-244),
    (9.999999999999999e-229, 1.1374523247142275e-244),
    (9.999999999999999e-230, 1.1374523247142276e-245),
    (9.999999999999999e-231, 6.797811778954926e-247),
    (1e-231, 1.0769224437207383e-248),
    (9.999999999999998e-233, 1.5379145781806207e-248),
    (1e-233, 4.205533798926934e-250),
    (1e-234, 4.205533798926934e-251),
    (1e-235, 4.2055337989269347e-252),
    (9.999999999999998e-237, 1.729961034136358e-252),
    (1e-237, 9.320146633177726e-255),
    (1e-238, 9.320146633177727e-256),
    (9.999999999999999e-240, 1.3719198786791061e-255),
    (1e-240, 3.0632120172299875e-257),
    (1e-241, 3.0632120172299876e-258),
    (1e-242, 3.0632120172299876e-259),
    (1e-243, 4.616527473176159e-261),
    (1e-244, 6.965550922098545e-261),
    (1e-245, 6.965550922098545e-262),
    (1e-246, 4.424965697574745e-263),
    (9.999999999999999e-248, 1.3952160289538995e-263),
    (1e-248, 2.0431670495836817e-265),
    (9.999999999999999e-250, 7.005247566231729e-266),
    (9.999999999999999e-251, 1.0106547889136759e-266),
    (9.999999999999998e-252, 1.7859798696399333e-267),
    (1e-252, 5.745344310051561e-269),
    (9.999999999999999e-254, 8.773957906638504e-270),
    (1e-254, 8.773957906638504e-271),
    (9.999999999999999e-256, 1.1140062278972053e-271),
    (1e-256, 2.2671708827212433e-273),
    (1e-257, 2.2671708827212434e-274),
    (1e-258, 4.5778196838282254e-275),
    (9.999999999999999e-260, 7.466130685211952e-276),
    (1e-260, 3.855741933482293e-277),
    (1e-261, 1.5992489636512566e-278),
    (9.999999999999999e-263, 1.288171381280644e-278),
    (9.999999999999998e-264, 1.6407484078167437e-279),
    (9.999999999999998e-265, 2.081469690986868e-280),
    (1e-265, 1.533140771175738e-282),
    (1e-266, 1.533140771175738e-283),
    (1e-267, 1.5331407711757378e-284),
    (1e-268, 4.223090009274642e-285),
    (1e-269, 4.223090009274642e-286),
    (9.999999999999998e-271, 1.6832227062863253e-286),
    (1e-271, 3.6977092987084495e-288),
    (1e-272, 6.9813387397471505e-289),
    (9.999999999999999e-274, 1.1085875541045525e-289),
    (1e-274, 3.389869038611071e-291),
    (1e-275, 6.596538414625428e-292),
    (9.999999999999999e-277, 1.0604875134643372e-292),
    (1e-277, 3.0892437846097252e-294),
    (1e-278, 6.220756847123745e-295),
    (9.999999999999999e-280, 1.4049539503408795e-295),
    (1e-280, 4.2635611830524824e-297),
    (9.999999999999999e-282, 1.3437915858386525e-297),
    (9.999999999999998e-283, 1.7260563639775709e-298),
    (1e-283, 5.3147893229345085e-300),
    (9.999999999999999e-285, 1.1287676481355109e-300),
    (9.999999999999999e-286, 1.1287676481355108e-301),
    (9.999999999999999e-287, 6.621358388839015e-303),
    (9.999999999999999e-288, 1.2454256004484133e-303),
    (9.999999999999999e-289, 1.2454256004484133e-304),
    (9.999999999999999e-290, 1.0175780373372759e-305),
    (9.999999999999999e-291, 7.32768583448354e-307),
    (1e-291, 3.767567660872019e-308),
];

/// Table index for an input `v = frac * 2^e` (from `frexp`), chosen so
/// `v * POW10[idx]` lands near unity. `0.30103` approximates `log10(2)`;
/// the truncation can land one entry off and the clamp cuts off the extreme
/// decades entirely, both of which the renormalization loop absorbs.
#[inline]
pub fn pow10_index(e: i32) -> usize {
    let idx = (309.0 + e as f64 * 0.30103) as i32;
    idx.clamp(0, POW10.len() as i32 - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{frexp, next_up};

    #[test]
    fn anchors() {
        assert_eq!(POW10[0], (9.999999999999998e307, 1.886049673240315e292));
        assert_eq!(POW10[286], (1e22, 0.0));
        assert_eq!(POW10[308], (1.0, 0.0));
        assert_eq!(POW10[309], (0.09999999999999999, 8.326672684688674e-18));
        assert_eq!(POW10[599], (1e-291, 3.767567660872019e-308));
    }

    #[test]
    fn truncation_invariants() {
        for (i, &(val, err)) in POW10.iter().enumerate() {
            assert!(val.is_finite() && val > 0.0, "entry {i}");
            assert!(err.is_finite() && err >= 0.0, "entry {i}");
            // truncation keeps the remainder under one ulp of val
            assert!(err < next_up(val) - val, "entry {i}: err {err} too large");
            // and the range is chosen so no remainder is subnormal
            assert!(err == 0.0 || err >= f64::MIN_POSITIVE, "entry {i}: err {err} subnormal");
        }
        // powers 10^0 ..= 10^22 are exactly representable
        for i in 286..=308 {
            assert_eq!(POW10[i].1, 0.0, "entry {i}");
        }
        assert_ne!(POW10[285].1, 0.0);
        assert_ne!(POW10[309].1, 0.0);
    }

    #[test]
    fn descends_by_decades() {
        for i in 1..POW10.len() {
            let (hi, _) = POW10[i - 1];
            let (lo, _) = POW10[i];
            let ratio = hi / lo;
            assert!((ratio - 10.0).abs() < 1e-12, "entries {} and {i}: ratio {ratio}", i - 1);
        }
    }

    #[test]
    fn index_function() {
        // v in [1, 2) scales by the tenth entry
        assert_eq!(pow10_index(1), 309);
        assert_eq!(POW10[pow10_index(1)].0, 0.09999999999999999);
        // monotone over the full frexp exponent range, inside bounds
        let mut prev = pow10_index(-1073);
        for e in -1072..=1024 {
            let idx = pow10_index(e);
            assert!(idx < POW10.len());
            assert!(idx >= prev, "index not monotone at e = {e}");
            prev = idx;
        }
        // both ends clamp
        assert_eq!(pow10_index(-1073), 0);
        assert_eq!(pow10_index(1024), 599);
        // the scaled product lands within renormalization's reach of unity,
        // even at the clamped ends (up to ~17 decades out)
        for v in [1.0, 0.5, 2.0, 1e-300, 1e300, 5e-324, f64::MAX, 1e16] {
            let (_, e) = frexp(v);
            let (tv, _) = POW10[pow10_index(e)];
            let scaled = v * tv;
            assert!(scaled > 1e-17 && scaled < 1e18, "v = {v}: scaled = {scaled}");
        }
    }
}
